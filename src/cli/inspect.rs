//! Read-only inspection commands (contrast, match)

use std::process::ExitCode;

use crate::contrast::contrast_grid;
use crate::output::{contrast_text, css_block, css_variables, reference_text, OutputFormat};
use crate::reference::match_reference_with_fallback;
use crate::scale::generate_scale_with_fallback;

use super::generate::emit_json;
use super::{Context, EXIT_INVALID_ARGS};

/// Execute the contrast command
pub fn run_contrast(ctx: &Context, color: &str, level: bool) -> ExitCode {
    if ctx.format() == OutputFormat::Css {
        eprintln!("Error: contrast supports --format text or json");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let result = generate_scale_with_fallback(color, &ctx.config.generate.fallback);
    ctx.warn_fallback(color, &result.fallback);
    let grid = contrast_grid(&result.scale);

    match ctx.format() {
        OutputFormat::Json => emit_json(ctx, &grid),
        _ => {
            let title = format!("Contrast for {} (anchor {})\n", result.input, result.anchor);
            ctx.emit(&format!("{}{}", title, contrast_text(&grid, level)))
        }
    }
}

/// Execute the match command
pub fn run_match(ctx: &Context, color: &str) -> ExitCode {
    let matched = match_reference_with_fallback(color, &ctx.config.generate.fallback);
    ctx.warn_fallback(color, &matched.fallback);

    match ctx.format() {
        OutputFormat::Json => emit_json(ctx, &matched),
        OutputFormat::Css => {
            let entries = matched.shades.iter().map(|s| (s.shade, s.hex.as_str()));
            ctx.emit(&css_block(&css_variables(matched.family, entries)))
        }
        OutputFormat::Text => ctx.emit(&reference_text(&matched, ctx.color)),
    }
}
