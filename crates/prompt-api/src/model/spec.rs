//! The static specification document and runtime descriptor produced by the prompt matcher.

use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structured description of the one fixed API shape.
///
/// Stored and served as-is; the service never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecDocument(pub Value);

impl SpecDocument {
    /// The Orders API document: `POST /orders`, `GET /orders/{id}` and the `Order` schema.
    pub fn orders_api() -> Self {
        Self(json!({
            "info": { "title": "Orders API", "version": "1.0.0" },
            "paths": {
                "/orders": { "post": { "summary": "Create order" } },
                "/orders/{id}": { "get": { "summary": "Get order by id" } }
            },
            "components": {
                "schemas": {
                    "Order": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "orderItems": { "type": "array" },
                            "totalAmount": { "type": "number" },
                            "status": { "type": "string", "enum": ["pending", "shipped", "cancelled"] },
                            "createdAt": { "type": "string", "format": "date-time" }
                        }
                    }
                }
            }
        }))
    }
}

/// Endpoint signatures served for a generated API and the status new orders start in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDescriptor {
    pub endpoints: Vec<String>,
    pub default_status: OrderStatus,
}

impl RuntimeDescriptor {
    pub fn orders_api() -> Self {
        Self {
            endpoints: vec!["POST /orders".to_string(), "GET /orders/:id".to_string()],
            default_status: OrderStatus::Pending,
        }
    }
}

/// Successful result of matching a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSpec {
    pub spec: SpecDocument,
    pub runtime: RuntimeDescriptor,
}
