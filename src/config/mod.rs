use crate::utils::error::Result;
use crate::utils::validation::{validate_filter_directive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging settings, loadable from a TOML document such as:
///
/// ```toml
/// level = "model_conversion=debug,info"
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        validate_filter_directive("level", &self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConversionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_empty() {
        let config = LoggingConfig::from_toml_str("").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_parse_json_format() {
        let config = LoggingConfig::from_toml_str(
            r#"
level = "model_conversion=debug,warn"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.level, "model_conversion=debug,warn");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_toml_error() {
        let err = LoggingConfig::from_toml_str(r#"format = "pretty""#).unwrap_err();
        assert!(matches!(err, ConversionError::Toml(_)));
    }

    #[test]
    fn test_blank_level_fails_validation() {
        let err = LoggingConfig::from_toml_str(r#"level = " ""#).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_unparsable_level_fails_validation() {
        let err = LoggingConfig::from_toml_str(r#"level = "model_conversion=loud""#).unwrap_err();
        match err {
            ConversionError::InvalidConfigValue { field, value, .. } => {
                assert_eq!(field, "level");
                assert_eq!(value, "model_conversion=loud");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "level = \"warn\"").unwrap();

        let config = LoggingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoggingConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConversionError::Io(_)));
    }
}
