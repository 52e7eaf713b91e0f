//! Tracing subscriber setup for binaries and tests that want log output.
//!
//! ## Log levels
//!
//! - **INFO**: run start and finish (`lodestar_harness`)
//! - **DEBUG**: search start and termination (`lodestar_search`)
//! - **TRACE**: individual pops and relaxations

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "lodestar_search=info,lodestar_harness=info";

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times; only the first call has effect. If another
/// subscriber is already installed, that one is kept.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}
