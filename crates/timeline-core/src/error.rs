//! Error types for the timeline core library.

use thiserror::Error;

/// Result type alias using `TimelineError`.
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Core error types for the timeline page.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A jump targeted a slide position that does not exist.
    #[error("Slide index {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    /// A required text field was blank.
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),
}

impl TimelineError {
    /// Create a new out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_error() {
        let err = TimelineError::out_of_range(5, 3);
        assert!(err.to_string().contains("index 5"));
        assert!(err.to_string().contains("3 slides"));
    }

    #[test]
    fn test_empty_field_error() {
        let err = TimelineError::EmptyField("site.title");
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: TimelineError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
