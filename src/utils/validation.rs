use crate::utils::error::{ConversionError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConversionError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` parses as a `tracing` filter directive, e.g. `info` or
/// `model_conversion=debug,warn`.
pub fn validate_filter_directive(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    EnvFilter::try_new(value)
        .map(|_| ())
        .map_err(|e| ConversionError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid filter directive: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "info").is_ok());
        assert!(validate_non_empty_string("logging.level", "").is_err());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }

    #[test]
    fn test_validate_filter_directive() {
        assert!(validate_filter_directive("logging.level", "debug").is_ok());
        assert!(validate_filter_directive("logging.level", "model_conversion=trace,warn").is_ok());
        assert!(validate_filter_directive("logging.level", "").is_err());
        assert!(validate_filter_directive("logging.level", "model_conversion=loud").is_err());
    }
}
