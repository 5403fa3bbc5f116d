//! User-facing feedback.
//!
//! Forms report outcomes through an injected [`Notifier`]; presentation
//! (toast, console line, log record) is up to the implementation.

use crate::error::ApiError;

/// Default text for a successful save.
pub const SUCCESS_MESSAGE: &str = "Changes saved successfully";

/// Default text when a request fails without a server message.
pub const ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Text shown when the selected image cannot be read or encoded.
pub const IMAGE_ERROR_MESSAGE: &str = "The image could not be processed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single fire-and-forget notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Error notice carrying the server's message, or the generic one.
    pub fn from_api_error(err: &ApiError) -> Self {
        Self::error(err.server_message().unwrap_or(ERROR_MESSAGE))
    }
}

/// Capability for presenting notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that emits notices as log records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(notice = %notice.message, "Success notice"),
            NoticeLevel::Error => tracing::warn!(notice = %notice.message, "Error notice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_with_message_uses_it() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(
            Notice::from_api_error(&err),
            Notice::error("Email already registered")
        );
    }

    #[test]
    fn api_error_without_message_uses_default() {
        let err = ApiError::Transport("timed out".to_string());
        assert_eq!(Notice::from_api_error(&err).message, ERROR_MESSAGE);
    }
}
