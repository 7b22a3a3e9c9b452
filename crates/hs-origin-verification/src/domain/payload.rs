//! # Handshake Payload Parser
//!
//! Splits and type-checks the raw handshake hostname field.
//!
//! Wire format written by the intermediary:
//!
//! ```text
//! <hostname>///<client_ip>:<client_port>///<timestamp_secs>///<base64(DER(r, s))>
//! ```
//!
//! Parsing is atomic: any segment failure aborts before signature work starts.

use super::entities::{HandshakePayload, PORT_SEPARATOR, SEGMENT_DELIMITER};
use super::errors::VerificationError;
use std::str::FromStr;

/// Parse a handshake hostname field into its five fields.
pub fn parse(field: &str) -> Result<HandshakePayload, VerificationError> {
    let segments: Vec<&str> = field.split(SEGMENT_DELIMITER).collect();
    let &[hostname, address, timestamp, signature] = segments.as_slice() else {
        return Err(VerificationError::MalformedPayload);
    };

    // Split on the last separator so unbracketed IPv6 literals survive.
    let (client_ip, port) = address
        .rsplit_once(PORT_SEPARATOR)
        .ok_or(VerificationError::InvalidPort)?;
    if client_ip.is_empty() {
        return Err(VerificationError::MalformedPayload);
    }
    let client_port: u16 = parse_decimal(port).ok_or(VerificationError::InvalidPort)?;

    let timestamp: u64 = parse_decimal(timestamp).ok_or(VerificationError::InvalidTimestamp)?;

    if signature.is_empty() {
        return Err(VerificationError::MalformedPayload);
    }

    Ok(HandshakePayload {
        hostname: hostname.to_string(),
        client_ip: client_ip.to_string(),
        client_port,
        timestamp,
        signature: signature.to_string(),
    })
}

/// Parse an unsigned decimal made of ASCII digits only.
///
/// `FromStr` for integers also takes a leading `+`, which the intermediary
/// never emits.
fn parse_decimal<T: FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
