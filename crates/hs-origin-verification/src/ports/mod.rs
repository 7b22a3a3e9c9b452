//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API the host runtime calls
//! - **Outbound (Driven)**: Dependencies the verifier needs

pub mod inbound;
pub mod outbound;
