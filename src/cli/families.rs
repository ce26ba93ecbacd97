//! Reference family listing

use clap::Subcommand;
use image::Rgba;
use std::process::ExitCode;

use crate::color::parse_rgba;
use crate::output::OutputFormat;
use crate::palettes::{families, family_by_name, suggest_families, Family};
use crate::terminal::swatch_row;

use super::generate::emit_json;
use super::{Context, EXIT_ERROR};

#[derive(Subcommand, Clone)]
pub enum FamilyAction {
    /// List all reference families
    List,
    /// Show the swatches of one family
    Show {
        /// Family name (e.g. blue, slate)
        name: String,
    },
}

fn swatch_rgba(hex: &str) -> Rgba<u8> {
    parse_rgba(hex).unwrap_or(Rgba([0, 0, 0, 255]))
}

fn family_json(family: &Family) -> serde_json::Value {
    let swatches: serde_json::Map<String, serde_json::Value> = family
        .swatches
        .iter()
        .map(|s| (s.shade.to_string(), serde_json::Value::from(s.hex)))
        .collect();
    serde_json::json!({ "name": family.name, "swatches": swatches })
}

/// Execute the families command
pub fn run_families(ctx: &Context, action: FamilyAction) -> ExitCode {
    match action {
        FamilyAction::List => {
            if ctx.format() == OutputFormat::Json {
                let all: Vec<serde_json::Value> = families().iter().map(family_json).collect();
                return emit_json(ctx, &all);
            }

            let mut out = String::from("Reference families:\n");
            for family in families() {
                if ctx.color {
                    let row = swatch_row(
                        family.swatches.iter().map(|s| (swatch_rgba(s.hex), "  ")),
                    );
                    out.push_str(&format!("  {:<8} {}\n", family.name, row));
                } else {
                    out.push_str(&format!("  {}\n", family.name));
                }
            }
            ctx.emit(&out)
        }
        FamilyAction::Show { name } => match family_by_name(&name) {
            Some(family) => {
                if ctx.format() == OutputFormat::Json {
                    return emit_json(ctx, &family_json(family));
                }

                let mut out = format!("Family: {}\n\n", family.name);
                for swatch in &family.swatches {
                    let hex = if ctx.color {
                        swatch_row([(swatch_rgba(swatch.hex), swatch.hex)])
                    } else {
                        swatch.hex.to_string()
                    };
                    out.push_str(&format!("  {:>3}  {}\n", swatch.shade, hex));
                }
                ctx.emit(&out)
            }
            None => {
                eprintln!("Error: Unknown family '{}'", name);
                let suggestions = suggest_families(&name, 2);
                if !suggestions.is_empty() {
                    eprintln!("Did you mean '{}'?", suggestions.join("', '"));
                }
                eprintln!();
                eprintln!("Available families:");
                for family in families() {
                    eprintln!("  {}", family.name);
                }
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}
