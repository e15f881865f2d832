//! The interactive order-entry session.
//!
//! One [`SessionDriver`] run walks a clerk through
//! `SelectCustomer → BuildOrder → Review → {Commit, Abort}` against an
//! injected store and terminal.

pub mod driver;


pub use driver::{SessionDriver, SessionError, SessionOutcome};
