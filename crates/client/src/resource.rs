//! REST client for one entity collection.
//!
//! | Operation | Request                     |
//! |-----------|-----------------------------|
//! | list      | `GET {base}/{resource}`       |
//! | get       | `GET {base}/{resource}/{id}`  |
//! | create    | `POST {base}/{resource}`      |
//! | update    | `PUT {base}/{resource}/{id}`  |
//!
//! Success bodies may be the bare JSON value or an envelope
//! `{"data": ..., "message": ...}`; the envelope is unwrapped.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use backoffice_core::api::{ApiResult, EntityApi};
use backoffice_core::types::DbId;

use crate::error::ClientError;

pub struct ResourceClient<R, P> {
    http: reqwest::Client,
    base_url: String,
    resource: &'static str,
    token: Option<String>,
    _types: PhantomData<fn() -> (R, P)>,
}

impl<R, P> ResourceClient<R, P> {
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        resource: &'static str,
        token: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            resource,
            token,
            _types: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    pub fn item_url(&self, id: DbId) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, otherwise a
    /// [`ClientError::Status`] with the server's message if it sent one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let body: Value = response.json().await?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Take `data` out of a `{"data": ...}` envelope; other bodies pass through.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(Value::as_str))
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<R, P> EntityApi for ResourceClient<R, P>
where
    R: DeserializeOwned + Send + 'static,
    P: Serialize + Send + Sync + 'static,
{
    type Record = R;
    type Payload = P;

    async fn list(&self) -> ApiResult<Vec<R>> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET collection");
        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::parse_response(response).await?)
    }

    async fn get(&self, id: DbId) -> ApiResult<R> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET item");
        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::parse_response(response).await?)
    }

    async fn create(&self, payload: &P) -> ApiResult<()> {
        let url = self.collection_url();
        tracing::debug!(%url, "POST item");
        let response = self
            .request(reqwest::Method::POST, url)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::check_status(response).await?)
    }

    async fn update(&self, id: DbId, payload: &P) -> ApiResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT item");
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::check_status(response).await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_is_unwrapped() {
        let body = json!({"success": true, "data": {"id": 1}, "message": "ok"});
        assert_eq!(unwrap_envelope(body), json!({"id": 1}));
    }

    #[test]
    fn bare_body_passes_through() {
        assert_eq!(unwrap_envelope(json!([1, 2])), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!({"id": 1})), json!({"id": 1}));
    }

    #[test]
    fn error_message_prefers_message_then_error() {
        assert_eq!(
            error_message(r#"{"message": "Not found", "error": "x"}"#).as_deref(),
            Some("Not found")
        );
        assert_eq!(
            error_message(r#"{"error": "Forbidden"}"#).as_deref(),
            Some("Forbidden")
        );
    }

    #[test]
    fn error_message_ignores_non_json_and_empty() {
        assert!(error_message("<html>502</html>").is_none());
        assert!(error_message(r#"{"message": ""}"#).is_none());
        assert!(error_message("").is_none());
    }
}
