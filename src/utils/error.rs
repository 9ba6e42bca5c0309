use thiserror::Error;

/// Ready-made error type for conversion implementations and crate plumbing.
///
/// The helpers in [`crate::core::conversion`] never produce this themselves;
/// they return whatever the delegated converter or reverter returns.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Conversion cancelled")]
    Cancelled,

    #[error("Conversion failed: {message}")]
    Failed { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConversionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConversionError::Cancelled.to_string(), "Conversion cancelled");
        assert_eq!(
            ConversionError::failed("bad row").to_string(),
            "Conversion failed: bad row"
        );

        let err = ConversionError::InvalidConfigValue {
            field: "logging.level".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_is_cancelled() {
        assert!(ConversionError::Cancelled.is_cancelled());
        assert!(!ConversionError::failed("x").is_cancelled());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::Io(_)));
    }
}
