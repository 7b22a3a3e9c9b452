//! # Handshake Shield Telemetry
//!
//! Structured logging for Handshake Shield binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hs_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_component("inspect");
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//!
//!     // Logs are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HS_SERVICE_NAME` | `handshake-shield` | Service name in logs |
//! | `HS_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` takes precedence) |
//! | `HS_JSON_LOGS` | `false` | JSON log lines (default on in containers) |
//! | `HS_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    init_logging(&config)?;

    Ok(TelemetryGuard {
        service: config.full_service_name(),
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service, "Shutting down telemetry");
    }
}

/// Convenience macro for creating a span with component context.
///
/// # Example
///
/// ```rust,ignore
/// use hs_telemetry::component_span;
///
/// fn handle_handshake() {
///     let _span = component_span!("handshake", component = "session", peer = "10.0.0.2:40000");
///     // ... verification
/// }
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
