use std::time::Duration;

use backoffice_core::models::{Activity, Category, User};
use backoffice_core::schema::{ContentPayload, UserPayload};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::resource::ResourceClient;

/// Collection paths on the backend.
pub const ACTIVITIES: &str = "activities";
pub const CATEGORIES: &str = "categories";
pub const USERS: &str = "users";

/// Entry point to the REST API. Cheap to clone; resource clients share
/// its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Client for an arbitrary collection path.
    pub fn resource<R, P>(&self, resource: &'static str) -> ResourceClient<R, P> {
        ResourceClient::new(
            self.http.clone(),
            self.config.api_url.clone(),
            resource,
            self.config.api_token.clone(),
        )
    }

    pub fn activities(&self) -> ResourceClient<Activity, ContentPayload> {
        self.resource(ACTIVITIES)
    }

    pub fn categories(&self) -> ResourceClient<Category, ContentPayload> {
        self.resource(CATEGORIES)
    }

    pub fn users(&self) -> ResourceClient<User, UserPayload> {
        self.resource(USERS)
    }
}
