//! Scale-producing commands (scale, secondary, complementary, semantic, palette)

use rayon::prelude::*;
use std::process::ExitCode;

use crate::output::{
    css_root, palette_set_css, palette_set_text, render_json, scale_text, OutputFormat,
};
use crate::palette_set::PaletteSet;
use crate::scale::{generate_scale_with_fallback, Scale, ScaleResult};
use crate::semantic::generate_semantic;
use crate::transforms::{complementary, secondary};

use super::{Context, EXIT_ERROR};

/// Render a serializable value as JSON, reporting encoder failures.
pub(super) fn emit_json<T: serde::Serialize + ?Sized>(ctx: &Context, value: &T) -> ExitCode {
    match render_json(value) {
        Ok(json) => ctx.emit(&json),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn primary(ctx: &Context, color: &str) -> ScaleResult {
    let result = generate_scale_with_fallback(color, &ctx.config.generate.fallback);
    ctx.warn_fallback(color, &result.fallback);
    result
}

/// Execute the scale command
pub fn run_scale(ctx: &Context, colors: &[String]) -> ExitCode {
    let fallback = ctx.config.generate.fallback.as_str();
    let results: Vec<ScaleResult> =
        colors.par_iter().map(|c| generate_scale_with_fallback(c, fallback)).collect();

    for (color, result) in colors.iter().zip(&results) {
        ctx.warn_fallback(color, &result.fallback);
    }

    match ctx.format() {
        OutputFormat::Json if results.len() == 1 => emit_json(ctx, &results[0]),
        OutputFormat::Json => emit_json(ctx, &results),
        OutputFormat::Css => {
            let names: Vec<String> = if results.len() == 1 {
                vec!["primary".to_string()]
            } else {
                (1..=results.len()).map(|i| format!("color-{}", i)).collect()
            };
            let sections = names.iter().map(String::as_str).zip(results.iter().map(|r| &r.scale));
            ctx.emit(&css_root(sections))
        }
        OutputFormat::Text => {
            let text: Vec<String> = results
                .iter()
                .map(|r| {
                    let title = format!("{} (anchor {})", r.input, r.anchor);
                    scale_text(&title, &r.scale, Some(r.anchor), ctx.color)
                })
                .collect();
            ctx.emit(&text.join("\n"))
        }
    }
}

fn emit_scale(ctx: &Context, name: &str, title: &str, scale: &Scale) -> ExitCode {
    match ctx.format() {
        OutputFormat::Json => emit_json(ctx, scale),
        OutputFormat::Css => ctx.emit(&css_root([(name, scale)])),
        OutputFormat::Text => ctx.emit(&scale_text(title, scale, None, ctx.color)),
    }
}

/// Execute the secondary command
pub fn run_secondary(ctx: &Context, color: &str) -> ExitCode {
    let base = primary(ctx, color);
    let options = ctx.config.generate.secondary;
    let scale = secondary(&base.scale, options);
    let title = format!(
        "secondary of {} (hue {:+}, chroma x{})",
        base.input, options.hue_shift, options.chroma_factor
    );
    emit_scale(ctx, "secondary", &title, &scale)
}

/// Execute the complementary command
pub fn run_complementary(ctx: &Context, color: &str) -> ExitCode {
    let base = primary(ctx, color);
    let options = ctx.config.generate.complementary;
    let scale = complementary(&base.scale, options);
    let title = format!("complementary of {} (chroma x{})", base.input, options.chroma_factor);
    emit_scale(ctx, "complementary", &title, &scale)
}

/// Execute the semantic command
pub fn run_semantic(ctx: &Context, color: &str) -> ExitCode {
    let base = primary(ctx, color);
    let semantic = generate_semantic(&base.scale);

    match ctx.format() {
        OutputFormat::Json => emit_json(ctx, &semantic),
        OutputFormat::Css => {
            ctx.emit(&css_root(semantic.iter().map(|(category, scale)| (category.name(), scale))))
        }
        OutputFormat::Text => {
            let text: Vec<String> = semantic
                .iter()
                .map(|(category, scale)| scale_text(category.name(), scale, None, ctx.color))
                .collect();
            ctx.emit(&text.join("\n"))
        }
    }
}

/// Execute the palette command
pub fn run_palette(ctx: &Context, color: &str) -> ExitCode {
    let set = PaletteSet::generate(color, &ctx.config.generate);
    ctx.warn_fallback(color, &set.fallback);

    match ctx.format() {
        OutputFormat::Json => emit_json(ctx, &set),
        OutputFormat::Css => ctx.emit(&palette_set_css(&set)),
        OutputFormat::Text => ctx.emit(&palette_set_text(&set, ctx.color)),
    }
}
