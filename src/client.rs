//! Outbound API client
//!
//! Thin HTTP wrapper for pushing alerts to the configured endpoint.
//! Every request attaches an `Authorization` header populated with the
//! stored API key when it is non-empty; no other header contract
//! applies. Calls are fire-and-forget from the core's perspective: no
//! retry, timeout escalation or backoff.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use thiserror::Error;

use crate::model::Alert;
use crate::prefs::Preferences;

/// Errors surfaced by outbound API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),
}

/// HTTP client bound to the preferred endpoint and API key
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Build a client from the current preferences
    pub fn from_preferences(prefs: &Preferences) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(5_000))
            .build()?;
        Ok(Self {
            http,
            base_url: prefs.api_endpoint.trim_end_matches('/').to_string(),
            api_key: prefs.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the Authorization header when a key is stored
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.header(AUTHORIZATION, self.api_key.as_str())
        }
    }

    /// POST a JSON body to `path` under the configured endpoint
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self
            .authorize(self.http.post(&url))
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(response.status().as_u16()))
        }
    }

    /// Push a newly created alert outward
    pub async fn push_alert(&self, alert: &Alert) -> Result<(), ClientError> {
        self.post("alerts", alert).await
    }
}
