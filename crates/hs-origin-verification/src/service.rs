//! # Origin Verification Service
//!
//! Application service layer that implements the `OriginVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`OriginVerificationApi`)
//! - Uses the outbound ports (`ClaimVerifier`, `Clock`)
//! - Delegates parsing and freshness checks to the domain layer
//!
//! ## Pipeline
//!
//! ```text
//! handshake field ──parse──→ HandshakePayload ──freshness──→ ──signature──→ ClientAddress
//!        │                          │                            │
//!        └── MalformedPayload       └── StaleOrInvalidTimestamp  └── SignatureVerificationFailed
//!            InvalidPort                                             InvalidSignature*
//!            InvalidTimestamp
//! ```
//!
//! Each stage short-circuits; nothing is cached between calls.

use crate::config::VerifierConfig;
use crate::domain::entities::ClientAddress;
use crate::domain::errors::{TrustAnchorError, VerificationError};
use crate::domain::freshness::{check_freshness, FRESHNESS_WINDOW};
use crate::domain::payload;
use crate::domain::signature::SignatureVerifier;
use crate::domain::trust_anchor::TrustAnchor;
use crate::ports::inbound::OriginVerificationApi;
use crate::ports::outbound::{ClaimVerifier, Clock, SystemClock};
use std::time::Duration;
use tracing::debug;

/// Origin Verification Service.
///
/// Owns the trust anchor (through its `ClaimVerifier`) and is safe to share
/// across any number of connection handlers.
#[derive(Debug, Clone)]
pub struct OriginVerificationService<V = SignatureVerifier, C = SystemClock>
where
    V: ClaimVerifier,
    C: Clock,
{
    verifier: V,
    clock: C,
    freshness_window: Duration,
}

impl OriginVerificationService {
    /// Create a service verifying against `anchor` with the system clock and
    /// the default freshness window.
    pub fn new(anchor: TrustAnchor) -> Self {
        Self::with_parts(SignatureVerifier::new(anchor), SystemClock, FRESHNESS_WINDOW)
    }

    /// Create a service from configuration.
    ///
    /// # Errors
    /// Returns `TrustAnchorError` if the configured anchor cannot be loaded.
    /// Callers must treat this as fatal.
    pub fn from_config(config: &VerifierConfig) -> Result<Self, TrustAnchorError> {
        let anchor = config.load_trust_anchor()?;
        Ok(Self::with_parts(
            SignatureVerifier::new(anchor),
            SystemClock,
            config.freshness_window,
        ))
    }
}

impl<V: ClaimVerifier, C: Clock> OriginVerificationService<V, C> {
    /// Assemble a service from explicit ports.
    pub fn with_parts(verifier: V, clock: C, freshness_window: Duration) -> Self {
        Self {
            verifier,
            clock,
            freshness_window,
        }
    }

    /// Replace the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> OriginVerificationService<V, C2> {
        OriginVerificationService {
            verifier: self.verifier,
            clock,
            freshness_window: self.freshness_window,
        }
    }

    /// The configured freshness window.
    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// The claim verifier in use.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }
}

impl<V: ClaimVerifier, C: Clock> OriginVerificationApi for OriginVerificationService<V, C> {
    fn verify(&self, handshake_field: &str) -> Result<ClientAddress, VerificationError> {
        let payload = payload::parse(handshake_field)?;

        check_freshness(
            payload.timestamp,
            self.clock.now_unix_secs(),
            self.freshness_window,
        )?;

        self.verifier.verify_claim(&payload)?;

        debug!(
            hostname = %payload.hostname,
            client_ip = %payload.client_ip,
            client_port = payload.client_port,
            "Origin claim verified"
        );

        Ok(payload.client_address())
    }
}

// =============================================================================
// TESTS
// =============================================================================
