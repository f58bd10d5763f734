//! JSON-over-HTTP transport shared by the desk clients.

use crate::config::ApiSettings;
use crate::error::{DeskError, DeskResult};
use crate::observability::TracedClientExt;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Thin wrapper over reqwest that knows the backend root and maps failures to `DeskError::Server`.
#[derive(Clone, Debug)]
pub struct JsonTransport {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl JsonTransport {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout: settings.timeout(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&ApiSettings {
            base_url: base_url.into(),
            timeout_secs: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DeskResult<T> {
        let url = self.url(path);

        let response = self
            .client
            .traced_get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "GET request failed");
                DeskError::server(format!("GET {} failed: {}", path, e))
            })?;

        decode(path, response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> DeskResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        decode(path, response).await
    }

    /// POST `body` as JSON to `path`; only the response status matters.
    pub async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> DeskResult<()> {
        let response = self.post(path, body).await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(path = %path, status = %status, "Backend rejected request");
            Err(DeskError::server(format!("{} returned {}", path, status)))
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> DeskResult<Response> {
        let url = self.url(path);

        self.client
            .traced_post(&url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "POST request failed");
                DeskError::server(format!("POST {} failed: {}", path, e))
            })
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> DeskResult<T> {
    let status = response.status();
    let body = response.text().await?;

    tracing::debug!(path = %path, status = %status, body = %body, "Backend response");

    if !status.is_success() {
        tracing::warn!(path = %path, status = %status, "Backend returned an error status");
        return Err(DeskError::server(format!("{} returned {}", path, status)));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(path = %path, error = %e, "Malformed backend response");
        DeskError::server(format!("{} returned malformed JSON: {}", path, e))
    })
}
