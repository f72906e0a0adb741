//! Error types for the Twitch embed facades

use thiserror::Error;

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving or configuring a widget handle.
///
/// Failures inside a bound handle are not represented here: they surface as
/// the handle's own associated error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Resolution errors
    #[error("Widget constructor {constructor} is not available on the page")]
    WidgetUnavailable { constructor: &'static str },

    #[error("Widget constructor {constructor} failed: {message}")]
    Construction {
        constructor: &'static str,
        message: String,
    },

    // Fallback errors
    #[error("Mount element not found: #{mount_id}")]
    MountNotFound { mount_id: String },

    #[error("Invalid iframe source: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // Configuration errors
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Create a construction error for the given constructor
    pub fn construction(constructor: &'static str, message: impl Into<String>) -> Self {
        Error::Construction {
            constructor,
            message: message.into(),
        }
    }

    /// Returns true if the fallback handle should replace the global one
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::WidgetUnavailable { .. } | Error::Construction { .. }
        )
    }

    /// Returns the error code for log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::WidgetUnavailable { .. } => "WIDGET_UNAVAILABLE",
            Error::Construction { .. } => "WIDGET_CONSTRUCTION",
            Error::MountNotFound { .. } => "MOUNT_NOT_FOUND",
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::InvalidOptions(_) => "INVALID_OPTIONS",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidOptions(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_errors_are_recoverable() {
        assert!(Error::WidgetUnavailable { constructor: "Twitch.Player" }.is_recoverable());
        assert!(Error::construction("Twitch.Embed", "boom").is_recoverable());
        assert!(!Error::InvalidOptions("bad".into()).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::construction("Twitch.Embed", "TypeError: x is undefined");
        assert_eq!(
            err.to_string(),
            "Widget constructor Twitch.Embed failed: TypeError: x is undefined"
        );
        assert_eq!(err.error_code(), "WIDGET_CONSTRUCTION");
    }
}
