use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "textmend.toml";
pub const ENV_PREFIX: &str = "TEXTMEND_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cleaner: CleanerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` and `show.html`
    pub templates_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            templates_dir: PathBuf::from("templates"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Column that gets normalized on top of the mojibake repair
    pub text_column: String,
    /// How many cleaned values to log once the export is done
    pub preview_rows: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("comments.csv"),
            output_path: PathBuf::from("comments_clean_utf8.csv"),
            text_column: "content".to_string(),
            preview_rows: 5,
        }
    }
}

impl CleanerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError("input_path must not be empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError("output_path must not be empty".to_string()));
        }
        if self.input_path == self.output_path {
            return Err(AppError::ValidationError(
                "output_path must differ from input_path".to_string(),
            ));
        }
        if self.text_column.trim().is_empty() {
            return Err(AppError::ValidationError("text_column must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Layered configuration: defaults, then `textmend.toml`, then
/// `TEXTMEND_*` environment variables (`__` separates nested keys).
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Self {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self { figment }
    }

    pub fn load(&self) -> Result<AppConfig> {
        Ok(self.figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_fixed_names() {
        let config = AppConfig::default();
        assert_eq!(config.cleaner.input_path, PathBuf::from("comments.csv"));
        assert_eq!(config.cleaner.output_path, PathBuf::from("comments_clean_utf8.csv"));
        assert_eq!(config.cleaner.text_column, "content");
        assert_eq!(config.server.port, 5000);
        assert!(config.cleaner.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("textmend.toml");
        fs::write(&path, "[server]\nport = 8088\n\n[cleaner]\ntext_column = \"body\"\n").unwrap();

        let config = ConfigService::from_file(&path).load().unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cleaner.text_column, "body");
        assert_eq!(config.cleaner.preview_rows, 5);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tmp = tempdir().unwrap();
        let config = ConfigService::from_file(&tmp.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config.server.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("textmend.toml");
        fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

        let err = ConfigService::from_file(&path).load().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let same = CleanerConfig {
            output_path: PathBuf::from("comments.csv"),
            ..Default::default()
        };
        assert!(same.validate().is_err());

        let blank = CleanerConfig {
            text_column: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }
}
