//! # Verification Errors
//!
//! Error types for origin claim verification.
//!
//! Every [`VerificationError`] is terminal for the current attempt. The caller
//! must treat the session as untrusted and must not substitute any address.

use thiserror::Error;

/// Per-request failures of the verification pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The handshake field does not split into exactly four segments,
    /// or a required segment is empty.
    #[error("Malformed handshake payload")]
    MalformedPayload,

    /// The port segment is missing or not a decimal u16.
    #[error("Invalid client port")]
    InvalidPort,

    /// The timestamp segment is not a decimal u64.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// The timestamp is older than the freshness window or lies in the future.
    #[error("Stale or future-dated timestamp, check system time")]
    StaleOrInvalidTimestamp,

    /// The signature segment is not valid standard base64.
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding,

    /// The decoded signature is not a DER `SEQUENCE { r INTEGER, s INTEGER }`
    /// with scalars in range for the trust anchor's curve.
    #[error("Invalid signature structure")]
    InvalidSignatureStructure,

    /// The signature does not validate against the trust anchor.
    #[error("Failed to verify payload signature")]
    SignatureVerificationFailed,
}

impl VerificationError {
    /// Stable, machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "malformed_payload",
            Self::InvalidPort => "invalid_port",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::StaleOrInvalidTimestamp => "stale_or_invalid_timestamp",
            Self::InvalidSignatureEncoding => "invalid_signature_encoding",
            Self::InvalidSignatureStructure => "invalid_signature_structure",
            Self::SignatureVerificationFailed => "signature_verification_failed",
        }
    }
}

/// Trust anchor initialization failure.
///
/// This is a startup-fatal condition: a process that cannot load its anchor
/// must not accept connections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrustAnchorError {
    /// The anchor constant is not valid base64.
    #[error("Trust anchor initialization failed: invalid base64 ({0})")]
    InvalidEncoding(String),

    /// The decoded bytes are not an ECDSA SubjectPublicKeyInfo on a supported curve.
    #[error("Trust anchor initialization failed: unsupported or malformed public key")]
    UnsupportedKey,
}
