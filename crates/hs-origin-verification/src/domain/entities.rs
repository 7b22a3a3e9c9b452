//! # Domain Entities
//!
//! Core data structures for origin claim verification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter between the four segments of a signed handshake field.
pub const SEGMENT_DELIMITER: &str = "///";

/// Separator between client IP and client port inside segment two.
pub const PORT_SEPARATOR: char = ':';

/// A parsed handshake hostname field.
///
/// Built once per verification call and dropped at the end of it. Every field
/// is well-formed by construction (see [`crate::domain::payload::parse`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandshakePayload {
    /// The hostname the client originally dialed
    pub hostname: String,
    /// Real client IP as observed by the intermediary (opaque)
    pub client_ip: String,
    /// Real client port as observed by the intermediary
    pub client_port: u16,
    /// Unix seconds at which the intermediary signed the claim
    pub timestamp: u64,
    /// Base64 DER ECDSA signature over [`HandshakePayload::canonical_message`]
    pub signature: String,
}

impl HandshakePayload {
    /// Rebuild the exact byte string the intermediary signed.
    ///
    /// `hostname///ip:port///timestamp`, integers rendered in plain decimal.
    pub fn canonical_message(&self) -> String {
        canonical_message(
            &self.hostname,
            &self.client_ip,
            self.client_port,
            self.timestamp,
        )
    }

    /// The client address carried by the claim.
    pub fn client_address(&self) -> ClientAddress {
        ClientAddress::new(self.client_ip.clone(), self.client_port)
    }
}

/// Render the signed portion of a handshake field.
pub fn canonical_message(hostname: &str, client_ip: &str, client_port: u16, timestamp: u64) -> String {
    format!(
        "{hostname}{SEGMENT_DELIMITER}{client_ip}{PORT_SEPARATOR}{client_port}{SEGMENT_DELIMITER}{timestamp}"
    )
}

/// A client address the host runtime may substitute for the transport peer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientAddress {
    /// Client IP, exactly as the intermediary wrote it
    pub ip: String,
    /// Client port
    pub port: u16,
}

impl ClientAddress {
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self { ip: ip.into(), port }
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ip.contains(':') {
            write!(f, "[{}]:{}", self.ip, self.port)
        } else {
            write!(f, "{}:{}", self.ip, self.port)
        }
    }
}
