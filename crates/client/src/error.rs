use backoffice_core::error::ApiError;

/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// `message` (or `error`) field of a JSON error body.
        message: Option<String>,
    },

    /// The body was not the JSON shape the caller expected.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => ApiError::Transport(e.to_string()),
            ClientError::Status { status, message } => ApiError::Status { status, message },
            ClientError::Decode(e) => ApiError::Decode(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keeps_server_message() {
        let err: ApiError = ClientError::Status {
            status: 404,
            message: Some("Category not found".to_string()),
        }
        .into();
        assert_eq!(err.server_message(), Some("Category not found"));
    }

    #[test]
    fn request_error_becomes_transport() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err: ApiError = ClientError::Request(req_err).into();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
