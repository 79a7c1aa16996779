//! Row structs for the store's tables.

pub mod donation;
