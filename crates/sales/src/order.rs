use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Cents, CustomerId, Entity, OrderId, Upc};

/// Order header. Created only when the session reaches "place order".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub placed_at: DateTime<Utc>,
    /// Name of the attendant who took the order.
    pub sold_by: String,
}

impl Order {
    pub fn new(customer_id: CustomerId, placed_at: DateTime<Utc>, sold_by: impl Into<String>) -> Self {
        Self {
            id: OrderId::new(),
            customer_id,
            placed_at,
            sold_by: sold_by.into(),
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// One (product, quantity, snapshotted price) row of a placed order.
///
/// At most one line exists per (order, product) pair; repeated selections are
/// merged before commit, in the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub upc: Upc,
    pub quantity: u32,
    /// List price captured when the product was selected, decoupled from
    /// later price changes.
    pub unit_sale_price: Cents,
}
