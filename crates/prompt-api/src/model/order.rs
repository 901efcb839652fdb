use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of an order. New orders are always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Cancelled,
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Orders are write-once: the ID and `created_at` never change after creation, and there is
/// no update or delete operation. The JSON form of this struct is exactly what is stored in
/// the `payload` column and what the HTTP surface returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Line items are opaque to the service.
    pub order_items: Vec<Value>,
    /// Kept as a JSON number so the stored and returned value is the one the client sent.
    pub total_amount: Number,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order, as received on `POST /orders`.
///
/// Both fields are optional at the wire level so that a missing field is reported as a
/// validation error rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub order_items: Option<Vec<Value>>,
    #[serde(default)]
    pub total_amount: Option<Number>,
}

impl OrderCreate {
    pub fn new(order_items: Vec<Value>, total_amount: impl Into<Number>) -> Self {
        Self {
            order_items: Some(order_items),
            total_amount: Some(total_amount.into()),
        }
    }
}

impl Order {
    /// Creates a new pending Order stamped with the current time.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `order_items` - Line items, already validated as non-empty
    /// * `total_amount` - Total price, already validated as non-negative
    pub fn new(id: OrderId, order_items: Vec<Value>, total_amount: Number) -> Self {
        Self {
            id,
            order_items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
