//! HTTP client for the backoffice REST API.
//!
//! [`ApiClient`] holds the shared connection pool and configuration;
//! [`ResourceClient`] implements [`EntityApi`](backoffice_core::api::EntityApi)
//! for one entity collection.

pub mod client;
pub mod config;
pub mod error;
pub mod resource;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use resource::ResourceClient;
