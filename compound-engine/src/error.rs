//! Layered error types

use compound_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The dictionary could not be indexed
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl EngineError {
    /// Whether the error comes from malformed dictionary words
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::InvalidInput { .. }))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use compound_core::InvalidWordReason;

    #[test]
    fn test_core_error_conversion() {
        let core = CoreError::InvalidInput {
            index: 2,
            word: "X".to_string(),
            reason: InvalidWordReason::InvalidChar { ch: 'X', position: 0 },
        };
        let err: EngineError = core.into();
        assert!(err.is_invalid_input());
        assert!(err.to_string().starts_with("core error: invalid input at word 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EngineError = io.into();
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: EngineError = utf8.into();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }
}
