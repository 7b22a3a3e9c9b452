//! # Adapters Layer
//!
//! Connects the service to the host runtime that owns the connections.

pub mod session;
