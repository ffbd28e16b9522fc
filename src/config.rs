//! User configuration (`config.toml`).
//!
//! Looked up in the platform config directory unless a path is given on the
//! command line. Problems never abort startup; they come back as warnings and
//! the defaults apply.

use cellpad_core::Features;
use cellpad_core::storage::DEFAULT_FILE_NAME;
use cellpad_engine::engine::{DEFAULT_COLS, DEFAULT_ROWS};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial number of rows.
    pub rows: usize,
    /// Initial number of columns.
    pub cols: usize,
    /// Where `export` writes when no path is given.
    pub export_file: PathBuf,
    pub features: Features,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            export_file: PathBuf::from(DEFAULT_FILE_NAME),
            features: Features::default(),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellpad")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load the config file, falling back to defaults. Returns any warnings.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let explicit = config_file.is_some();
    let Some(path) = config_file.map(Path::to_path_buf).or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if explicit {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match parse_config(&content) {
                Ok(config) => Some(config),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), err));
            None
        }
    };

    (config.unwrap_or_default(), warnings)
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial() {
        let config = parse_config(
            r#"
            rows = 3
            export_file = "out.json"

            [features]
            bold = false
            "#,
        )
        .unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.export_file, PathBuf::from("out.json"));
        assert!(!config.features.bold);
        assert!(config.features.clipboard);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("colour = \"red\"").is_err());
        assert!(parse_config("[features]\nundo = true").is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let (config, warnings) = load_config(Some(path.as_path()));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn test_load_bad_file_warns_and_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = \"many\"").unwrap();
        let (config, warnings) = load_config(Some(file.path()));
        assert_eq!(config, Config::default());
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn test_load_good_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cols = 4").unwrap();
        let (config, warnings) = load_config(Some(file.path()));
        assert!(warnings.is_empty());
        assert_eq!(config.cols, 4);
    }
}
