//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits for the dependencies the verification service needs: a time source
//! and the cryptographic check of a parsed claim.

use crate::domain::entities::HandshakePayload;
use crate::domain::errors::VerificationError;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time source, read once per verification call.
pub trait Clock: Send + Sync {
    /// Current time in whole seconds since the Unix epoch.
    fn now_unix_secs(&self) -> u64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> u64 {
        // A clock set before 1970 reads as 0, which makes every claim stale.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock frozen at one instant. Used for offline inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> u64 {
        self.0
    }
}

/// Cryptographic check of a fully parsed claim.
///
/// Implemented by [`crate::domain::signature::SignatureVerifier`].
/// Implementations must be pure and thread-safe.
pub trait ClaimVerifier: Send + Sync {
    /// Verify the claim's signature over its canonical message.
    ///
    /// # Errors
    /// * `InvalidSignatureEncoding` - signature is not base64
    /// * `InvalidSignatureStructure` - decoded bytes are not a DER (r, s) pair
    /// * `SignatureVerificationFailed` - the signature does not validate
    fn verify_claim(&self, payload: &HandshakePayload) -> Result<(), VerificationError>;
}

impl<T: ClaimVerifier + ?Sized> ClaimVerifier for std::sync::Arc<T> {
    fn verify_claim(&self, payload: &HandshakePayload) -> Result<(), VerificationError> {
        (**self).verify_claim(payload)
    }
}
