/// Failure reported by an [`EntityApi`](crate::api::EntityApi) call.
///
/// Transport-agnostic: the HTTP client maps its own errors into these
/// variants so the form layer never depends on `reqwest`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message suitable for showing to the user.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_message() {
        let err = ApiError::Status {
            status: 404,
            message: Some("Activity not found".to_string()),
        };
        assert_eq!(err.to_string(), "API error (404): Activity not found");
        assert_eq!(err.server_message(), Some("Activity not found"));
    }

    #[test]
    fn status_without_message() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (500): <no message>");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn transport_has_no_server_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.server_message().is_none());
    }
}
