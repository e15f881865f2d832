//! Storage layer: the catalog store trait, its in-memory implementation, and
//! catalog seeding.

pub mod in_memory;
pub mod seed;
pub mod store;

pub use in_memory::InMemoryCatalogStore;
pub use seed::{seed_catalog, SeedData, SeedError, SeedTarget};
pub use store::{CatalogStore, StoreError};
