//! Sales domain: the in-memory order draft and its commit-time records.
//!
//! Everything here is deterministic domain logic. The draft never talks to the
//! store; stock is resolved at the boundary (shortage resolution) before a
//! line reaches the accumulator.

pub mod draft;
pub mod order;
pub mod shortage;

pub use draft::{DraftLine, OrderDraft};
pub use order::{Order, OrderLine};
pub use shortage::{resolve_shortage, LineOutcome, ShortageChoice};
