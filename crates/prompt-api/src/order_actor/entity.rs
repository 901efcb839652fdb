//! [`ActorEntity`] implementation for the [`Order`] domain type.
//!
//! Creation is where the order invariants are enforced: at least one line item and a
//! non-negative total. A rejected payload never reaches storage.

use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use actor_framework::ActorEntity;

impl OrderCreate {
    /// Checks the payload without creating anything.
    ///
    /// Exposed separately so the HTTP layer can reject a bad body before authorizing.
    pub fn validate(&self) -> Result<(), OrderError> {
        match &self.order_items {
            Some(items) if !items.is_empty() => {}
            _ => return Err(OrderError::ValidationError("orderItems required".into())),
        }
        match self.total_amount.as_ref().and_then(|n| n.as_f64()) {
            Some(total) if total >= 0.0 => Ok(()),
            _ => Err(OrderError::ValidationError("totalAmount must be >= 0".into())),
        }
    }
}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        match (params.order_items, params.total_amount) {
            (Some(items), Some(total)) => Ok(Order::new(id, items, total)),
            _ => Err(OrderError::ValidationError("orderItems required".into())),
        }
    }
}
