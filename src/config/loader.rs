//! Configuration loading and discovery for `huescale.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{ColorMode, HuescaleConfig};
use crate::output::OutputFormat;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the config file looked up on disk
pub const CONFIG_FILE_NAME: &str = "huescale.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse huescale.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output format
    pub format: Option<OutputFormat>,
    /// Force colors off
    pub no_color: bool,
    /// Override secondary hue shift
    pub hue_shift: Option<f64>,
    /// Override secondary chroma factor
    pub secondary_chroma: Option<f64>,
    /// Override complementary chroma factor
    pub complementary_chroma: Option<f64>,
    /// Include the reference match
    pub reference: Option<bool>,
}

/// Find huescale.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for huescale.toml
/// 2. Check XDG_CONFIG_HOME/huescale/huescale.toml (or ~/.config/huescale/huescale.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find huescale.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("huescale").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find huescale.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a huescale.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("brand/huescale.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<HuescaleConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<HuescaleConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let config: HuescaleConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no huescale.toml is found.
pub fn default_config() -> HuescaleConfig {
    HuescaleConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut HuescaleConfig, overrides: &CliOverrides) {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    if overrides.no_color {
        config.output.color = ColorMode::Never;
    }

    if let Some(hue_shift) = overrides.hue_shift {
        config.generate.secondary.hue_shift = hue_shift;
    }
    if let Some(chroma) = overrides.secondary_chroma {
        config.generate.secondary.chroma_factor = chroma;
    }
    if let Some(chroma) = overrides.complementary_chroma {
        config.generate.complementary.chroma_factor = chroma;
    }

    if let Some(reference) = overrides.reference {
        config.generate.reference = reference;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\nformat = \"json\"");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");

        let subdir = temp.path().join("design").join("tokens");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    #[serial]
    fn test_find_xdg_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let dir = temp.path().join("huescale");
        fs::create_dir_all(&dir).expect("should create xdg dir");
        let config_path = write_config(&dir, "");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, Some(config_path));
    }

    #[test]
    #[serial]
    fn test_find_xdg_config_missing() {
        let temp = TempDir::new().expect("should create temp dir");
        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r##"
[generate]
fallback = "#22c55e"

[generate.secondary]
hue_shift = 90

[output]
format = "json"
"##,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.generate.fallback, "#22c55e");
        assert_eq!(config.generate.secondary.hue_shift, 90.0);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("nonexistent.toml");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[generate]
fallback = "chartreuse-ish"
"#,
        );

        let result = load_config(Some(&config_path));
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("generate.fallback"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides_format_and_color() {
        let mut config = default_config();
        let overrides =
            CliOverrides { format: Some(OutputFormat::Css), no_color: true, ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.output.format, OutputFormat::Css);
        assert_eq!(config.output.color, ColorMode::Never);
    }

    #[test]
    fn test_merge_cli_overrides_generate() {
        let mut config = default_config();
        let overrides = CliOverrides {
            hue_shift: Some(-15.0),
            secondary_chroma: Some(0.5),
            complementary_chroma: Some(0.25),
            reference: Some(true),
            ..Default::default()
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.generate.secondary.hue_shift, -15.0);
        assert_eq!(config.generate.secondary.chroma_factor, 0.5);
        assert_eq!(config.generate.complementary.chroma_factor, 0.25);
        assert!(config.generate.reference);
    }

    #[test]
    fn test_merge_cli_overrides_empty_keeps_file_values() {
        let mut config = default_config();
        config.output.color = ColorMode::Always;
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config, {
            let mut expected = default_config();
            expected.output.color = ColorMode::Always;
            expected
        });
    }
}
