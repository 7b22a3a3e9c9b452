//! # Origin Verification
//!
//! Authenticates the real client address that a trusted intermediary proxy
//! embeds, signed, in the handshake hostname field of every connection it
//! forwards.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Parsing, freshness and ECDSA logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//! - **Adapters Layer** (`adapters/`): Host session hook
//!
//! ## Security Notes
//!
//! - **Fail closed**: any parse, freshness or signature failure rejects the
//!   session and substitutes no address
//! - **Replay window**: claims older than the freshness window (3s by default)
//!   or dated in the future are rejected
//! - **Canonical message**: the signed bytes are rebuilt from parsed fields, so
//!   non-canonical renderings never verify
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hs_origin_verification::{OriginVerificationApi, OriginVerificationService, VerifierConfig};
//!
//! let service = OriginVerificationService::from_config(&VerifierConfig::from_env()?)?;
//! let address = service.verify_remote(handshake.server_address(), session.remote())?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::session::{
    HandshakeGuard, HandshakeOutcome, HandshakeSession, SessionProfile, DISCONNECT_REASON,
};
pub use config::{ConfigError, VerifierConfig};
pub use domain::entities::{canonical_message, ClientAddress, HandshakePayload};
pub use domain::errors::{TrustAnchorError, VerificationError};
pub use domain::freshness::{check_freshness, FRESHNESS_WINDOW};
pub use domain::payload::parse;
pub use domain::signature::{message_digest, SignatureVerifier};
pub use domain::trust_anchor::{TrustAnchor, EMBEDDED_TRUST_ANCHOR};
pub use ports::inbound::OriginVerificationApi;
pub use ports::outbound::{ClaimVerifier, Clock, FixedClock, SystemClock};
pub use service::OriginVerificationService;
