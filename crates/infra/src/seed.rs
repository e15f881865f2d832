//! Default catalog seeding.
//!
//! The demo ships a small hardware catalog as an embedded JSON document; the
//! binary loads it into whatever store it constructs at startup. Seed data is
//! setup, not behavior; sessions only ever see it through the store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderdesk_catalog::{Customer, Product};
use orderdesk_core::DomainError;

use crate::store::StoreError;

/// The default catalog: four hardware products at 50 units each, and four
/// customers on file.
const DEFAULT_SEED: &str = r#"{
  "products": [
    {
      "upc": "076174517163",
      "name": "16 oz. hickory hammer",
      "manufacturer": "Stanely Tools",
      "model": "1",
      "unit_list_price": 997,
      "units_in_stock": 50
    },
    {
      "upc": "000000000001",
      "name": "16 oz. spatula",
      "manufacturer": "Waterfall Tools",
      "model": "3",
      "unit_list_price": 350,
      "units_in_stock": 50
    },
    {
      "upc": "076174533211",
      "name": "16 oz. bolts",
      "manufacturer": "Hardware Place",
      "model": "10",
      "unit_list_price": 420,
      "units_in_stock": 50
    },
    {
      "upc": "022222222222",
      "name": "16 oz. anvil",
      "manufacturer": "Drop Stuff",
      "model": "2",
      "unit_list_price": 10010,
      "units_in_stock": 50
    }
  ],
  "customers": [
    { "name": "Shirley Cho", "phone": "555-555-5555", "street": "hello st", "zip": "91770" },
    { "name": "Shi C",       "phone": "555-555-5554", "street": "hello st", "zip": "91770" },
    { "name": "Shirl Ch",    "phone": "555-555-5553", "street": "hello st", "zip": "91770" },
    { "name": "Shelly Choo", "phone": "555-555-5552", "street": "hello st", "zip": "91770" }
  ]
}"#;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A store that accepts catalog rows at setup time.
///
/// Kept separate from [`crate::CatalogStore`]: the order-entry workflow never
/// creates customers or products, only seeding does.
pub trait SeedTarget {
    fn insert_customer(&self, customer: Customer) -> Result<(), StoreError>;
    fn insert_product(&self, product: Product) -> Result<(), StoreError>;
}

/// A customer row as it appears in the seed document. Identifiers are
/// assigned when the record is created, not carried in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCustomer {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub zip: String,
}

/// Parsed seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub customers: Vec<SeedCustomer>,
}

impl SeedData {
    /// The embedded default catalog.
    pub fn default_catalog() -> Result<Self, SeedError> {
        Ok(serde_json::from_str(DEFAULT_SEED)?)
    }
}

/// Insert every seed row into `store`, in document order.
pub fn seed_catalog<S: SeedTarget>(store: &S, data: &SeedData) -> Result<(), SeedError> {
    for product in &data.products {
        store.insert_product(product.clone())?;
    }
    for row in &data.customers {
        let customer = Customer::new(&row.name, &row.phone, &row.street, &row.zip)?;
        store.insert_customer(customer)?;
    }
    tracing::info!(
        products = data.products.len(),
        customers = data.customers.len(),
        "seeded catalog"
    );
    Ok(())
}
