//! HTTP transport against the label endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::label::LabelResponse;

/// Transport and endpoint errors for a single fetch attempt.
///
/// These never cross the search orchestration boundary; the lookup loop
/// logs them and moves to the next shape or term.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("label endpoint returned status {0}")]
    Status(StatusCode),

    #[error("label endpoint reported: {0}")]
    Api(String),

    #[error("malformed label response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Transport seam between the search loop and the wire.
///
/// The reqwest-backed [`OpenFdaClient`] implements this in production;
/// tests script it.
pub trait LabelFetch {
    /// Fetch label records matching a search expression.
    fn fetch_label(
        &self,
        search: &str,
        limit: usize,
    ) -> impl Future<Output = Result<LabelResponse, LookupError>> + Send;
}

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Label endpoint URL.
    pub base_url: String,
    /// Timeout applied to each individual attempt.
    pub attempt_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.fda.gov/drug/label.json".into(),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

/// reqwest-backed label client.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl OpenFdaClient {
    /// Client over the live endpoint with default configuration.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.attempt_timeout)
            .build()?;
        Ok(Self { http, config })
    }
}

impl LabelFetch for OpenFdaClient {
    fn fetch_label(
        &self,
        search: &str,
        limit: usize,
    ) -> impl Future<Output = Result<LabelResponse, LookupError>> + Send {
        async move {
            let limit = limit.to_string();
            let response = self
                .http
                .get(&self.config.base_url)
                .query(&[("search", search), ("limit", limit.as_str())])
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                // A "no matches" envelope is an empty result set, not a
                // transport failure; anything else non-2xx is.
                if let Ok(envelope) = serde_json::from_str::<LabelResponse>(&body) {
                    if let Some(error) = envelope.error {
                        if error.is_no_matches() {
                            return Ok(LabelResponse::default());
                        }
                        return Err(LookupError::Api(
                            error.message.unwrap_or_else(|| status.to_string()),
                        ));
                    }
                }
                return Err(LookupError::Status(status));
            }

            Ok(serde_json::from_str(&body)?)
        }
    }
}
