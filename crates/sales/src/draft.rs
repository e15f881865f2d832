use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_catalog::Product;
use orderdesk_core::{Cents, CustomerId, DomainError, DomainResult, Upc};

use crate::order::{Order, OrderLine};

/// One accumulated line of the draft: product, quantity, snapshotted price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLine {
    pub upc: Upc,
    /// Display name, carried so the cart can render without store round-trips.
    pub product_name: String,
    pub quantity: u32,
    pub unit_sale_price: Cents,
}

impl DraftLine {
    pub fn subtotal(&self) -> DomainResult<Cents> {
        self.unit_sale_price
            .checked_mul(self.quantity)
            .ok_or_else(|| DomainError::invariant("line subtotal overflows"))
    }
}

/// In-memory accumulator for one interactive ordering session.
///
/// Repeat selections of the same product merge into the existing line; the
/// price snapshot taken at the first selection wins. The draft holds no stock
/// state at all; callers resolve stock before adding a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` units of `product`, merging into an existing line for
    /// the same UPC if there is one.
    pub fn add_line(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.upc == product.upc) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| DomainError::invariant("merged line quantity overflows"))?;
            return Ok(());
        }

        self.lines.push(DraftLine {
            upc: product.upc.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_sale_price: product.unit_list_price,
        });
        Ok(())
    }

    /// Σ(quantity × unit_sale_price) over all lines, exact.
    pub fn total(&self) -> DomainResult<Cents> {
        self.lines.iter().try_fold(Cents::ZERO, |acc, line| {
            acc.checked_add(line.subtotal()?)
                .ok_or_else(|| DomainError::invariant("order total overflows"))
        })
    }

    /// Turn the draft into the records a commit writes: the order header and
    /// one `OrderLine` per accumulated line.
    pub fn into_order(
        self,
        customer_id: CustomerId,
        placed_at: DateTime<Utc>,
        sold_by: impl Into<String>,
    ) -> (Order, Vec<OrderLine>) {
        let order = Order::new(customer_id, placed_at, sold_by);
        let lines = self
            .lines
            .into_iter()
            .map(|line| OrderLine {
                order_id: order.id,
                upc: line.upc,
                quantity: line.quantity,
                unit_sale_price: line.unit_sale_price,
            })
            .collect();
        (order, lines)
    }
}
