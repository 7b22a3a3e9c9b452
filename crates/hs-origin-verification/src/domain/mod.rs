//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod entities;
pub mod errors;
pub mod freshness;
pub mod payload;
pub mod signature;
pub mod trust_anchor;
