//! # Freshness Checker
//!
//! Bounds the age of a signed claim so a captured handshake cannot be replayed
//! once the window has passed.

use super::errors::VerificationError;
use std::time::Duration;

/// Maximum age of a claim, in whole seconds.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(3);

/// Accept `timestamp` only if `now - timestamp < window`.
///
/// Future-dated timestamps are rejected outright rather than being allowed to
/// wrap in unsigned arithmetic.
pub fn check_freshness(
    timestamp: u64,
    now: u64,
    window: Duration,
) -> Result<(), VerificationError> {
    let age = now
        .checked_sub(timestamp)
        .ok_or(VerificationError::StaleOrInvalidTimestamp)?;

    if age < window.as_secs() {
        Ok(())
    } else {
        Err(VerificationError::StaleOrInvalidTimestamp)
    }
}
