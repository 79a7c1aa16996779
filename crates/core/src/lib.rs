//! Domain types and pure logic for the donations tracker.
//!
//! Nothing in this crate touches the network or the database; the store and
//! HTTP layers depend on it, never the other way round.

pub mod donation;
pub mod error;
pub mod types;
pub mod validation;
