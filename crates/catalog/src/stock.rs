use thiserror::Error;

use orderdesk_core::Upc;

use crate::product::Product;

/// Stock accounting failure inside a session's working copy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("unknown product: {0}")]
    UnknownProduct(Upc),

    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: u32, available: u32 },
}

#[derive(Debug, Clone)]
struct StockEntry {
    product: Product,
    remaining: u32,
}

/// Session-local working copy of the in-stock product list.
///
/// Reservations decrement `remaining` only; the durable store is written once,
/// at commit, from whatever this view reports as dirty. Dropping the view is a
/// complete rollback.
#[derive(Debug, Clone, Default)]
pub struct StockView {
    entries: Vec<StockEntry>,
}

impl StockView {
    /// Build a view over a product listing, preserving its order.
    pub fn new(products: Vec<Product>) -> Self {
        let entries = products
            .into_iter()
            .map(|product| StockEntry {
                remaining: product.units_in_stock,
                product,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The product at a menu position, with its reservation-adjusted count.
    pub fn get(&self, index: usize) -> Option<(&Product, u32)> {
        self.entries.get(index).map(|e| (&e.product, e.remaining))
    }

    /// Remaining units for a product after reservations so far.
    pub fn available(&self, upc: &Upc) -> Result<u32, StockError> {
        self.entry(upc).map(|e| e.remaining)
    }

    /// Reserve units against the local copy. Refuses to go below zero.
    pub fn reserve(&mut self, upc: &Upc, quantity: u32) -> Result<(), StockError> {
        let entry = self.entry_mut(upc)?;
        entry.remaining = entry.remaining.checked_sub(quantity).ok_or(
            StockError::InsufficientStock {
                requested: quantity,
                available: entry.remaining,
            },
        )?;
        Ok(())
    }

    /// Products and reservation-adjusted counts, in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, u32)> {
        self.entries.iter().map(|e| (&e.product, e.remaining))
    }

    /// Entries whose remaining count diverged from the durable record.
    ///
    /// These are exactly the stock updates a commit must write back.
    pub fn dirty(&self) -> impl Iterator<Item = (&Upc, u32)> {
        self.entries
            .iter()
            .filter(|e| e.remaining != e.product.units_in_stock)
            .map(|e| (&e.product.upc, e.remaining))
    }

    fn entry(&self, upc: &Upc) -> Result<&StockEntry, StockError> {
        self.entries
            .iter()
            .find(|e| &e.product.upc == upc)
            .ok_or_else(|| StockError::UnknownProduct(upc.clone()))
    }

    fn entry_mut(&mut self, upc: &Upc) -> Result<&mut StockEntry, StockError> {
        self.entries
            .iter_mut()
            .find(|e| &e.product.upc == upc)
            .ok_or_else(|| StockError::UnknownProduct(upc.clone()))
    }
}
