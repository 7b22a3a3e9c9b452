//! # Handshake Session Adapter
//!
//! Connects the verification service to a host proxy runtime.
//!
//! The host calls [`HandshakeGuard::on_handshake`] for every client handshake
//! packet, before any address-dependent logic runs (bans, geolocation, logs).
//!
//! ## Flow
//!
//! ```text
//! handshake packet ──server address──→ [HandshakeGuard] ──→ OriginVerificationApi
//!                                              │
//!                        ┌─────────────────────┴──────────────────────┐
//!                        ↓                                            ↓
//!                  [claim valid]                               [claim invalid]
//!                        │                                            │
//!                        ↓                                            ↓
//!   override_remote(client_ip, observed_port)         disconnect + cancel the packet
//! ```

use crate::domain::entities::ClientAddress;
use crate::domain::errors::VerificationError;
use crate::ports::inbound::OriginVerificationApi;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Message shown to clients whose claim fails verification.
pub const DISCONNECT_REASON: &str = "Failed to verify session";

/// Identity the host knows for a session, used only for logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionProfile {
    pub name: String,
    pub id: Option<Uuid>,
}

/// The slice of a host session the guard needs.
pub trait HandshakeSession {
    /// Transport-layer peer address (the intermediary's address).
    fn remote(&self) -> SocketAddr;

    /// Player identity, if the host has one yet.
    fn profile(&self) -> SessionProfile;

    /// Terminate the session with a client-visible reason.
    fn disconnect(&mut self, reason: &str);

    /// Substitute the effective remote address for the rest of the session.
    fn override_remote(&mut self, ip: &str, port: u16);
}

/// What the host must do with the handshake packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandshakeOutcome {
    /// Remote address was overridden; let the packet through.
    Trusted(ClientAddress),
    /// Session was disconnected; the host must cancel the packet.
    Rejected(VerificationError),
}

impl HandshakeOutcome {
    /// Whether the host must cancel the packet event.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Verifies handshake claims and applies the result to host sessions.
pub struct HandshakeGuard<A: OriginVerificationApi> {
    api: Arc<A>,
}

impl<A: OriginVerificationApi> HandshakeGuard<A> {
    pub fn new(api: Arc<A>) -> Self {
        info!("Handshake guard enabled");
        Self { api }
    }

    /// Get a reference to the underlying service.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Handle one client handshake.
    ///
    /// On success the session's remote address becomes the embedded client IP
    /// with the observed transport port. On failure the session is
    /// disconnected and no address is substituted.
    pub fn on_handshake<S>(&self, server_address: &str, session: &mut S) -> HandshakeOutcome
    where
        S: HandshakeSession + ?Sized,
    {
        let observed = session.remote();

        match self.api.verify_remote(server_address, observed) {
            Ok(address) => {
                debug!(
                    observed = %observed,
                    effective = %address,
                    "Overriding session remote address"
                );
                session.override_remote(&address.ip, address.port);
                HandshakeOutcome::Trusted(address)
            }
            Err(error) => {
                let profile = session.profile();
                warn!(
                    player = %profile.name,
                    uuid = ?profile.id,
                    observed = %observed,
                    reason = %error,
                    kind = error.kind(),
                    "Failed to verify session"
                );
                session.disconnect(DISCONNECT_REASON);
                HandshakeOutcome::Rejected(error)
            }
        }
    }
}
