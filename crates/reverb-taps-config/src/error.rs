//! Error types for layout and report operations.

use reverb_taps_core::ConvertError;
use thiserror::Error;

/// Errors that can occur while loading a layout or serializing a report.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Failed to serialize JSON
    #[error("failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// A sample rate, delay or scale was out of range
    #[error("invalid argument: {0}")]
    Convert(#[from] ConvertError),

    /// Layout has no tap groups
    #[error("layout '{0}' has no tap groups")]
    EmptyLayout(String),

    /// Two groups share a label prefix
    #[error("duplicate tap group prefix: {0}")]
    DuplicatePrefix(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn convert_error_converts_via_from() {
        let err: ConfigError = ConvertError::InvalidSampleRate(0).into();
        assert!(matches!(
            err,
            ConfigError::Convert(ConvertError::InvalidSampleRate(0))
        ));
    }

    #[test]
    fn convert_display_wraps_inner_message() {
        let err = ConfigError::from(ConvertError::InvalidDelay {
            index: 1,
            value: -2.0,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("invalid argument: "), "got: {msg}");
        assert!(msg.contains("index 1"), "got: {msg}");
    }

    #[test]
    fn empty_layout_display() {
        let err = ConfigError::EmptyLayout("bare".to_string());
        assert_eq!(err.to_string(), "layout 'bare' has no tap groups");
    }

    #[test]
    fn duplicate_prefix_display() {
        let err = ConfigError::DuplicatePrefix("comb".to_string());
        assert_eq!(err.to_string(), "duplicate tap group prefix: comb");
    }

    #[test]
    fn toml_parse_source_is_some() {
        let parse_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(err.source().is_some(), "TomlParse must expose its source");
    }

    #[test]
    fn empty_layout_source_is_none() {
        let err = ConfigError::EmptyLayout("x".to_string());
        assert!(err.source().is_none());
    }
}
