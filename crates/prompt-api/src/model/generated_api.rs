use crate::model::{GeneratedSpec, RuntimeDescriptor, SpecDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for generated-API records (the "registry id").
///
/// Distinct from [`OrderId`](crate::model::OrderId): a registry id names an issued key, not an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiId(pub String);

impl From<String> for ApiId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ApiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One issued access key and what it was issued for.
///
/// Records are never mutated. `spec` and `created_at` are optional so that snapshots
/// written without them still load.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedApi {
    pub id: ApiId,
    pub key: String,
    pub prompt: String,
    pub runtime: RuntimeDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<SpecDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// The access key is a secret and must not end up in logs.
impl std::fmt::Debug for GeneratedApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedApi")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .field("prompt", &self.prompt)
            .field("runtime", &self.runtime)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Payload for issuing a new key: the prompt and what the matcher produced for it.
#[derive(Debug, Clone)]
pub struct GeneratedApiCreate {
    pub prompt: String,
    pub generated: GeneratedSpec,
}

/// What `POST /generate` hands back to the caller after issuing.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedApi {
    pub id: ApiId,
    pub key: String,
}
