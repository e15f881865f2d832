//! The catalog store: the one durable collaborator of the order-entry
//! workflow.
//!
//! Reads happen freely while the clerk browses; all writes are deferred to
//! the single commit step and arrive here as one logical batch (order header,
//! then each line, then each stock update). The trait deliberately has no
//! transaction or rollback operation; an aborted session never reaches the
//! store at all.

use std::sync::Arc;

use thiserror::Error;

use orderdesk_catalog::{Customer, Product};
use orderdesk_core::{CustomerId, Upc};
use orderdesk_sales::{Order, OrderLine};

/// Catalog store operation error.
///
/// These are infrastructure failures (missing records, duplicate keys,
/// backend trouble), as opposed to domain errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Storage interface for customers, products and placed orders.
///
/// Implementations must keep listing order deterministic: customers in seed
/// order, in-stock products sorted by UPC. "In stock" means
/// `units_in_stock != 0`, exactly.
pub trait CatalogStore: Send + Sync {
    /// All customers on file, in seed order.
    fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    /// A single customer by id; `NotFound` if absent.
    fn get_customer(&self, id: CustomerId) -> Result<Customer, StoreError>;

    /// Products with a nonzero stock count, sorted by UPC.
    fn list_in_stock_products(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product by UPC; `NotFound` if absent.
    fn get_product(&self, upc: &Upc) -> Result<Product, StoreError>;

    /// Set a product's stock count to an absolute value.
    fn update_stock(&self, upc: &Upc, new_quantity: u32) -> Result<(), StoreError>;

    /// Persist an order header.
    fn insert_order(&self, order: &Order) -> Result<(), StoreError>;

    /// Persist one order line. Rejects a duplicate (order, product) pair.
    fn insert_order_line(&self, line: &OrderLine) -> Result<(), StoreError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        (**self).list_customers()
    }

    fn get_customer(&self, id: CustomerId) -> Result<Customer, StoreError> {
        (**self).get_customer(id)
    }

    fn list_in_stock_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list_in_stock_products()
    }

    fn get_product(&self, upc: &Upc) -> Result<Product, StoreError> {
        (**self).get_product(upc)
    }

    fn update_stock(&self, upc: &Upc, new_quantity: u32) -> Result<(), StoreError> {
        (**self).update_stock(upc, new_quantity)
    }

    fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        (**self).insert_order(order)
    }

    fn insert_order_line(&self, line: &OrderLine) -> Result<(), StoreError> {
        (**self).insert_order_line(line)
    }
}
