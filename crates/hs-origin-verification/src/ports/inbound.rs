//! # Inbound Ports (Driving Ports / API)
//!
//! The API the host runtime calls from its handshake path.

use crate::domain::entities::ClientAddress;
use crate::domain::errors::VerificationError;
use std::net::SocketAddr;

/// Primary origin verification API.
///
/// Calls are synchronous, CPU-bound and independent of each other.
/// Implementations must be thread-safe (`Send + Sync`).
pub trait OriginVerificationApi: Send + Sync {
    /// Verify a handshake hostname field and return the embedded client address.
    ///
    /// Parses, checks freshness, then verifies the signature, stopping at the
    /// first failure.
    fn verify(&self, handshake_field: &str) -> Result<ClientAddress, VerificationError>;

    /// Verify a handshake hostname field and compute the effective remote
    /// address: the embedded client IP paired with the port observed on the
    /// transport.
    fn verify_remote(
        &self,
        handshake_field: &str,
        observed: SocketAddr,
    ) -> Result<ClientAddress, VerificationError> {
        let claimed = self.verify(handshake_field)?;
        Ok(ClientAddress::new(claimed.ip, observed.port()))
    }
}
