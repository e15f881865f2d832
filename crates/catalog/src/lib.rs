//! Catalog records and the session-local stock view.
//!
//! `Product` and `Customer` are the durable records the store holds. The
//! `StockView` is a working copy of inventory held by one interactive session:
//! it absorbs speculative reservations so the durable record is never touched
//! before commit.

pub mod customer;
pub mod product;
pub mod stock;

pub use customer::Customer;
pub use product::Product;
pub use stock::{StockError, StockView};
