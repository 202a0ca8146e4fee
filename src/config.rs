use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Client configuration, captured once at construction and immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NanoGptConfig {
    /// API key sent as the `x-api-key` header on every call.
    pub api_key: String,
    /// Model used when a call does not name one explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl NanoGptConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_model: None,
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Fail-fast check run at client construction, not deferred to the first
    /// call.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::configuration("API key not provided"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = NanoGptConfig::new("").validate().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn non_empty_api_key_passes() {
        assert!(NanoGptConfig::new("key").validate().is_ok());
    }
}
