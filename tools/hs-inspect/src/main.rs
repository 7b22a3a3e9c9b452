//! HS-Inspect: offline verifier for signed handshake hostname fields.
//!
//! Runs the same pipeline the proxy runs and reports the trusted address or
//! the failure kind.
//!
//! ```bash
//! hs-inspect 'example.com///203.0.113.5:54321///1700000000///MGUCMQ...' \
//!     --observed 10.0.0.2:40000 --now 1700000001
//! ```
//!
//! Exit status: 0 trusted, 1 rejected, 2 configuration error.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use hs_origin_verification::{
    parse, ClientAddress, Clock, FixedClock, OriginVerificationApi, OriginVerificationService,
    SystemClock, VerificationError, VerifierConfig,
};
use hs_telemetry::{component_span, init_telemetry, log_event, TelemetryConfig};

/// HS-Inspect: verify a signed handshake hostname field
#[derive(Parser, Debug)]
#[command(name = "hs-inspect")]
#[command(about = "Verify a signed handshake hostname field against the trust anchor")]
struct Args {
    /// The handshake hostname field, exactly as received
    payload: String,

    /// Transport address the connection was observed from; its port is kept
    #[arg(short, long)]
    observed: Option<SocketAddr>,

    /// Evaluate freshness at this Unix time instead of the system clock
    #[arg(long)]
    now: Option<u64>,

    /// Freshness window in seconds (overrides HS_FRESHNESS_WINDOW_SECS)
    #[arg(long)]
    freshness_window: Option<u64>,

    /// Base64 SPKI trust anchor (overrides HS_TRUST_ANCHOR)
    #[arg(long)]
    trust_anchor: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Machine-readable verification report.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Report {
    Trusted { address: ClientAddress },
    Rejected { kind: &'static str, reason: String },
}

impl Report {
    fn from_result(result: &Result<ClientAddress, VerificationError>) -> Self {
        match result {
            Ok(address) => Self::Trusted {
                address: address.clone(),
            },
            Err(error) => Self::Rejected {
                kind: error.kind(),
                reason: error.to_string(),
            },
        }
    }
}

fn load_config(args: &Args) -> Result<VerifierConfig> {
    let mut config = VerifierConfig::from_env().context("Invalid verifier environment")?;

    if let Some(secs) = args.freshness_window {
        config.freshness_window = Duration::from_secs(secs);
    }
    if let Some(anchor) = &args.trust_anchor {
        config.trust_anchor = Some(anchor.clone());
    }

    config.validate().context("Invalid verifier configuration")?;
    Ok(config)
}

fn run(args: &Args) -> Result<Result<ClientAddress, VerificationError>> {
    let config = load_config(args)?;
    let now = args.now.unwrap_or_else(|| SystemClock.now_unix_secs());

    let service = OriginVerificationService::from_config(&config)
        .context("Failed to load trust anchor")?
        .with_clock(FixedClock(now));

    let _span = component_span!("inspect", component = "inspect", now).entered();

    log_event!(
        info,
        "inspect",
        "Verifying handshake field",
        curve = service.verifier().anchor().curve(),
        freshness_window_secs = config.freshness_window.as_secs()
    );

    if let Ok(payload) = parse(&args.payload) {
        log_event!(
            debug,
            "inspect",
            "Parsed handshake payload",
            hostname = %payload.hostname,
            client_ip = %payload.client_ip,
            client_port = payload.client_port,
            age_secs = now.saturating_sub(payload.timestamp)
        );
    }

    Ok(match args.observed {
        Some(observed) => service.verify_remote(&args.payload, observed),
        None => service.verify(&args.payload),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _telemetry = match init_telemetry(TelemetryConfig::for_component("inspect")) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    let result = match run(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let report = Report::from_result(&result);
    if args.json {
        match serde_json::to_string(&report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: failed to encode report: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        match &report {
            Report::Trusted { address } => println!("trusted {}", address),
            Report::Rejected { kind, reason } => println!("rejected {}: {}", kind, reason),
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
