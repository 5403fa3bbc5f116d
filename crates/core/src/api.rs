//! Remote collection of one entity type.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::DbId;

pub type ApiResult<T> = Result<T, ApiError>;

/// The four calls a form needs from the backend.
///
/// One request per call: no retries, caching, or batching.
#[async_trait]
pub trait EntityApi: Send + Sync {
    type Record: Send;
    type Payload: Send + Sync;

    async fn list(&self) -> ApiResult<Vec<Self::Record>>;

    async fn get(&self, id: DbId) -> ApiResult<Self::Record>;

    async fn create(&self, payload: &Self::Payload) -> ApiResult<()>;

    async fn update(&self, id: DbId, payload: &Self::Payload) -> ApiResult<()>;
}
