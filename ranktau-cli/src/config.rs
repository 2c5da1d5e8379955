/// Config file loading and creation for the ranktau CLI.
///
/// Config lives at ~/.config/ranktau/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RanktauConfig {
    /// File-name fragment between a source prefix and the pair index.
    pub infix: Option<String>,
    /// Print JSON reports by default.
    pub json: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# ranktau configuration
# All values here can be overridden by CLI flags.

# Fragment between a source prefix and the pair index.
# With the default, `ranktau tau runs/master runs/student` pairs
# runs/master_rankings_* with runs/student_rankings_*.
# infix = \"_rankings_\"

# Print JSON reports instead of plain text
# json = false
";

/// Returns the default config path: ~/.config/ranktau/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("ranktau").join("config.toml")
}

pub fn parse_config(content: &str) -> Result<RanktauConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> RanktauConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => RanktauConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap(), RanktauConfig::default());
    }

    #[test]
    fn test_parse_values() {
        let cfg = parse_config("infix = \"-r-\"\njson = true\n").unwrap();
        assert_eq!(cfg.infix.as_deref(), Some("-r-"));
        assert_eq!(cfg.json, Some(true));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(parse_config("rounds = 3\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(load_config(&tmp.path().join("config.toml")), RanktauConfig::default());
    }

    #[test]
    fn test_create_then_load() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        create_default_config(&path);
        assert!(path.exists());
        assert_eq!(load_config(&path), RanktauConfig::default());
    }
}
