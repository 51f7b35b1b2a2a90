//! # Tihar Connect Storefront
//!
//! Session controller for the Tihar Connect storefront: the products made
//! in the prison workshops, a cart with a mock checkout, the jail
//! authority's order approvals, and donations to rehabilitation programs.
//!
//! ## Module Organization
//! ```text
//! tihar_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── cart.rs     ◄─── Cart container
//! │   ├── orders.rs   ◄─── Order book container
//! │   ├── nav.rs      ◄─── Routes, role, view generations
//! │   └── config.rs   ◄─── storefront.toml + TIHAR_* env
//! ├── commands/       ◄─── One function per UI action
//! ├── flows.rs        ◄─── Mock checkout/donation + delayed tasks
//! ├── shell.rs        ◄─── Line-based event shell
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod flows;
pub mod shell;
pub mod state;

use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{AppState, StorefrontConfig, DEFAULT_LOG_FILTER};

/// Runs a storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → TIHAR_* env → validate               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else the config's log_filter                            │
/// │     • Logs go to stderr; stdout carries only replies                    │
/// │                                                                         │
/// │  3. Build AppState ───────────────────────────────────────────────────► │
/// │     • sample catalog, empty cart, seeded orders, home page              │
/// │                                                                         │
/// │  4. Run the event shell until EOF or `quit` ──────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> std::io::Result<()> {
    let loaded = StorefrontConfig::load(config_path);

    let filter = match &loaded {
        Ok(config) => config.log_filter.as_str(),
        Err(_) => DEFAULT_LOG_FILTER,
    };
    init_tracing(filter);

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load storefront config: {}. Using defaults.", e);
        StorefrontConfig::default()
    });

    info!(
        store = %config.store_name,
        role = %config.default_role,
        policy = %config.status_policy,
        "Starting Tihar Connect storefront"
    );

    let state = AppState::new(config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell::run(&state, stdin, tokio::io::stdout()).await?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tihar_storefront=trace` - Trace the app crate only
/// - Default: `default_filter` (usually `info,tihar=debug`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
