//! # Verifier Configuration
//!
//! Defaults reproduce the production behavior: the embedded trust anchor and
//! a 3 second freshness window. Both can be overridden from the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HS_FRESHNESS_WINDOW_SECS` | `3` | Maximum claim age, whole seconds, > 0 |
//! | `HS_TRUST_ANCHOR` | embedded key | Base64 SPKI of the intermediary key |

use crate::domain::errors::TrustAnchorError;
use crate::domain::freshness::FRESHNESS_WINDOW;
use crate::domain::trust_anchor::TrustAnchor;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const ENV_FRESHNESS_WINDOW: &str = "HS_FRESHNESS_WINDOW_SECS";
pub const ENV_TRUST_ANCHOR: &str = "HS_TRUST_ANCHOR";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    /// The freshness window would reject every claim.
    #[error("Freshness window must be at least one second")]
    ZeroFreshnessWindow,
}

/// Configuration of the verification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Maximum accepted age of a claim.
    pub freshness_window: Duration,
    /// Base64 SPKI override; `None` selects the embedded anchor.
    pub trust_anchor: Option<String>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            freshness_window: FRESHNESS_WINDOW,
            trust_anchor: None,
        }
    }
}

impl VerifierConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FRESHNESS_WINDOW) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_FRESHNESS_WINDOW,
                value: raw.clone(),
            })?;
            config.freshness_window = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(ENV_TRUST_ANCHOR) {
            if !raw.trim().is_empty() {
                config.trust_anchor = Some(raw);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the service unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.freshness_window.as_secs() == 0 {
            return Err(ConfigError::ZeroFreshnessWindow);
        }
        Ok(())
    }

    /// Load the configured trust anchor. Failure is startup-fatal.
    pub fn load_trust_anchor(&self) -> Result<TrustAnchor, TrustAnchorError> {
        match &self.trust_anchor {
            Some(encoded) => TrustAnchor::from_base64_spki(encoded),
            None => TrustAnchor::embedded(),
        }
    }
}
