// src/logging.rs
//! Tracing setup for the binary. Everything goes to stderr so stdout stays
//! reserved for the rendered result.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "sheet_scan=info,sheet_scan_usecase=info,sheet_scan_infra=info";
const VERBOSE_LOG_FILTER: &str = "sheet_scan=debug,sheet_scan_usecase=debug,sheet_scan_infra=debug";

/// `RUST_LOG` wins when set; otherwise `verbose` picks the debug filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER })
}
