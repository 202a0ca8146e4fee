use std::env;
use std::time::Duration;

use serde::Serialize;

use crate::{Error, Result};

/// Fixed API origin; endpoint paths are resolved against it.
pub const DEFAULT_BASE_URL: &str = "https://nano-gpt.com/api/";

/// Thin wrapper over `reqwest::Client` that applies the shared request
/// template: base URL, `x-api-key` and `Content-Type` headers.
///
/// The transport imposes no retry or backoff policy. A call either completes
/// or fails once; the only timeout is the client-level one configured here.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub(crate) fn new(
        api_key: &str,
        base_url: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        // Builder option wins; env knob is for deployments that cannot
        // change code (default 30s).
        let timeout = timeout
            .or_else(|| {
                env::var("NANOGPT_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs)
            })
            .unwrap_or(Duration::from_secs(30));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::connection(None, e.to_string()))?;

        let mut base_url = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body with the shared headers. Non-success statuses fail
    /// with the status preserved; pure transport failures carry no status.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;
        Self::ensure_success(response)
    }

    /// POST with the shared headers and no body (the balance endpoint).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        Self::ensure_success(response)
    }

    /// GET with the shared headers.
    pub(crate) async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        Self::ensure_success(response)
    }

    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::warn!(status = status.as_u16(), url = %response.url(), "request failed");
            Err(Error::connection(
                Some(status.as_u16()),
                format!("request failed with status {}", status),
            ))
        }
    }
}
