use serde::Deserialize;
use serde_json::Value;

/// Response body of `GET /api/_health`: whether the backend reached its store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub status_code: u16,
    #[serde(default)]
    pub body: Value,
}
