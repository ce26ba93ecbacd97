//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod families;
mod generate;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::color::ColorError;
use crate::config::{load_config, merge_cli_overrides, CliOverrides, HuescaleConfig};
use crate::logging;
use crate::output::{write_output, OutputFormat};
use crate::terminal::use_color;

pub use families::FamilyAction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// huescale - Generate 50-950 color scales from a single seed color
#[derive(Parser)]
#[command(name = "huescale")]
#[command(about = "huescale - Generate perceptual 50-950 color scales from a single seed color")]
#[command(version)]
pub struct Cli {
    /// Path to huescale.toml (default: search upward from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log scale and match decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never emit ANSI color swatches
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the 50-950 scale for one or more colors
    Scale {
        /// Seed colors (hex like #3B82F6 or 3b82f6, or any CSS color)
        #[arg(required = true)]
        colors: Vec<String>,

        /// Output format (default: from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Generate the scale and rotate its hue (default: +30 degrees, 85% chroma)
    Secondary {
        /// Seed color
        color: String,

        /// Degrees added to every hue
        #[arg(long, allow_hyphen_values = true)]
        hue_shift: Option<f64>,

        /// Multiplier applied to every chroma
        #[arg(long)]
        chroma_factor: Option<f64>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Generate the scale and rotate its hue by 180 degrees
    Complementary {
        /// Seed color
        color: String,

        /// Multiplier applied to every chroma
        #[arg(long)]
        chroma_factor: Option<f64>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Generate info, success, warning and danger scales matched to a color
    Semantic {
        /// Seed color
        color: String,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show contrast ratios between every pair of shades
    Contrast {
        /// Seed color
        color: String,

        /// Show WCAG levels (AAA, AA, AA18, -) instead of ratios
        #[arg(long)]
        level: bool,

        /// Output format (text or json)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Match a color against the reference palette families
    Match {
        /// Color to match
        color: String,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Generate every scale for a color in one pass
    Palette {
        /// Seed color
        color: String,

        /// Also include the reference palette match
        #[arg(long)]
        reference: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List and inspect the reference palette families
    Families {
        #[command(subcommand)]
        action: Option<FamilyAction>,

        /// Output format (text or json)
        #[arg(long, value_enum, global = true)]
        format: Option<OutputFormat>,
    },
}

impl Commands {
    fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Scale { format, .. }
            | Commands::Semantic { format, .. }
            | Commands::Contrast { format, .. }
            | Commands::Match { format, .. }
            | Commands::Families { format, .. } => {
                CliOverrides { format: *format, ..Default::default() }
            }
            Commands::Secondary { hue_shift, chroma_factor, format, .. } => CliOverrides {
                format: *format,
                hue_shift: *hue_shift,
                secondary_chroma: *chroma_factor,
                ..Default::default()
            },
            Commands::Complementary { chroma_factor, format, .. } => CliOverrides {
                format: *format,
                complementary_chroma: *chroma_factor,
                ..Default::default()
            },
            Commands::Palette { reference, format, .. } => CliOverrides {
                format: *format,
                reference: reference.then_some(true),
                ..Default::default()
            },
        }
    }
}

/// Settings shared by every command after config and flags are merged.
pub struct Context {
    pub config: HuescaleConfig,
    /// Emit ANSI swatches in text output
    pub color: bool,
    output: Option<PathBuf>,
}

impl Context {
    pub fn format(&self) -> OutputFormat {
        self.config.output.format
    }

    /// Print rendered output, or write it to the `--output` file.
    pub fn emit(&self, contents: &str) -> ExitCode {
        match &self.output {
            Some(path) => match write_output(path, contents) {
                Ok(()) => {
                    eprintln!("Wrote {}", path.display());
                    ExitCode::from(EXIT_SUCCESS)
                }
                Err(e) => {
                    eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                    ExitCode::from(EXIT_ERROR)
                }
            },
            None => {
                print!("{}", contents);
                ExitCode::from(EXIT_SUCCESS)
            }
        }
    }

    /// Tell the user their input was replaced by the fallback color.
    pub fn warn_fallback(&self, input: &str, error: &Option<ColorError>) {
        if let Some(e) = error {
            eprintln!(
                "Warning: '{}' is not a valid color ({}); using {}",
                input, e, self.config.generate.fallback
            );
        }
    }
}

fn build_context(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    output: Option<PathBuf>,
) -> Result<Context, ExitCode> {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };

    merge_cli_overrides(&mut config, overrides);

    // Flags can reintroduce values the file loader would have rejected
    let errors = config.validate();
    if !errors.is_empty() {
        for e in errors {
            eprintln!("Error: {}", e);
        }
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    let color = output.is_none() && use_color(config.output.color);
    Ok(Context { config, color, output })
}

/// Entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut overrides = cli.command.overrides();
    overrides.no_color = cli.no_color;

    let ctx = match build_context(cli.config.as_deref(), &overrides, cli.output) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match cli.command {
        Commands::Scale { colors, .. } => generate::run_scale(&ctx, &colors),
        Commands::Secondary { color, .. } => generate::run_secondary(&ctx, &color),
        Commands::Complementary { color, .. } => generate::run_complementary(&ctx, &color),
        Commands::Semantic { color, .. } => generate::run_semantic(&ctx, &color),
        Commands::Palette { color, .. } => generate::run_palette(&ctx, &color),
        Commands::Contrast { color, level, .. } => inspect::run_contrast(&ctx, &color, level),
        Commands::Match { color, .. } => inspect::run_match(&ctx, &color),
        Commands::Families { action, .. } => {
            families::run_families(&ctx, action.unwrap_or(FamilyAction::List))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scale_multiple_colors() {
        let cli = Cli::try_parse_from(["huescale", "scale", "#3B82F6", "red", "--format", "json"])
            .expect("should parse");
        match cli.command {
            Commands::Scale { colors, format } => {
                assert_eq!(colors, ["#3B82F6", "red"]);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("expected scale command"),
        }
    }

    #[test]
    fn test_parse_negative_hue_shift() {
        let cli = Cli::try_parse_from(["huescale", "secondary", "#3B82F6", "--hue-shift", "-45"])
            .expect("should parse");
        let overrides = cli.command.overrides();
        assert_eq!(overrides.hue_shift, Some(-45.0));
        assert_eq!(overrides.secondary_chroma, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["huescale", "match", "#ef4444", "--no-color", "-v"])
            .expect("should parse");
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_scale_requires_color() {
        assert!(Cli::try_parse_from(["huescale", "scale"]).is_err());
    }

    #[test]
    fn test_palette_reference_override() {
        let cli = Cli::try_parse_from(["huescale", "palette", "#3B82F6"]).expect("should parse");
        assert_eq!(cli.command.overrides().reference, None);
        let cli = Cli::try_parse_from(["huescale", "palette", "#3B82F6", "--reference"])
            .expect("should parse");
        assert_eq!(cli.command.overrides().reference, Some(true));
    }
}
