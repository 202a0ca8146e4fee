use serde::Deserialize;
use serde_json::{Map, Value};

/// Balance-check response. Provider-reported fields beyond `balance` are
/// preserved in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub balance: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
