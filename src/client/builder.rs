use std::sync::Arc;
use std::time::Duration;

use crate::config::NanoGptConfig;
use crate::transport::HttpTransport;
use crate::Result;

use super::core::NanoGptClient;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct NanoGptClientBuilder {
    api_key: String,
    default_model: Option<String>,
    /// Override base URL (primarily for testing with mock servers).
    base_url_override: Option<String>,
    timeout: Option<Duration>,
}

impl NanoGptClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_model: None,
            base_url_override: None,
            timeout: None,
        }
    }

    /// Model used when a call does not name one explicitly.
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Override the fixed API origin.
    ///
    /// This is primarily for testing with mock servers; production calls go
    /// to the default origin.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Per-request timeout (default 30s, env-overridable via
    /// `NANOGPT_HTTP_TIMEOUT_SECS`).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. Fails fast when the API key is empty.
    pub fn build(self) -> Result<NanoGptClient> {
        let config = NanoGptConfig {
            api_key: self.api_key,
            default_model: self.default_model,
        };
        config.validate()?;

        let transport = Arc::new(HttpTransport::new(
            &config.api_key,
            self.base_url_override.as_deref(),
            self.timeout,
        )?);

        Ok(NanoGptClient { config, transport })
    }
}
