//! Domain-level error types for profile-card.
//!
//! Profile mutations and theme resolution are fail-soft and never produce
//! these errors. Only configuration, filesystem, serialization and the
//! raster export path surface failures.

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Capturing or encoding the card image failed. No artifact was produced.
    #[error("Raster export failed: {message}")]
    RasterExport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// User input could not be interpreted.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl AppError {
    /// Create a JSON error.
    pub fn json(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create a raster export error without an underlying cause.
    pub fn raster(message: impl Into<String>) -> Self {
        Self::RasterExport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a raster export error wrapping the underlying cause.
    pub fn raster_from(
        message: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RasterExport {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Whether this error came from the raster export path.
    #[must_use]
    pub const fn is_raster(&self) -> bool {
        matches!(self, Self::RasterExport { .. })
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_error_display() {
        let err = AppError::raster("no rendered surface attached");
        assert_eq!(
            err.to_string(),
            "Raster export failed: no rendered surface attached"
        );
        assert!(err.is_raster());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = AppError::io(
            "Failed to write artifact",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_raster());
    }
}
