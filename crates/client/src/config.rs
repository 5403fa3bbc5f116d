/// Default API base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    /// Bearer token sent with every request, when set.
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `BACKOFFICE_API_URL`   | `http://localhost:3000`  |
    /// | `BACKOFFICE_API_TOKEN` | unset                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("BACKOFFICE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let api_token = std::env::var("BACKOFFICE_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_REQUEST_TIMEOUT_SECS,
                    "REQUEST_TIMEOUT_SECS is not a positive number, using default"
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self::new(api_url).with_token(api_token).with_timeout(request_timeout_secs)
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            api_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn with_token(mut self, api_token: Option<String>) -> Self {
        self.api_token = api_token;
        self
    }

    pub fn with_timeout(mut self, request_timeout_secs: u64) -> Self {
        self.request_timeout_secs = request_timeout_secs;
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = normalize_url(api_url.into());
        self
    }
}

/// A zero timeout would fail every request immediately.
fn parse_timeout(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|secs| *secs > 0)
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://api.example.com/v1/");
        assert_eq!(config.api_url, "http://api.example.com/v1");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new(DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout("15"), Some(15));
        assert_eq!(parse_timeout(" 7 "), Some(7));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-3"), None);
        assert_eq!(parse_timeout("soon"), None);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("http://a")
            .with_api_url("http://b/")
            .with_token(Some("t0ken".to_string()))
            .with_timeout(5);
        assert_eq!(config.api_url, "http://b");
        assert_eq!(config.api_token.as_deref(), Some("t0ken"));
        assert_eq!(config.request_timeout_secs, 5);
    }
}
