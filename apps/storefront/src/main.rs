//! # Tihar Connect Storefront Entry Point
//!
//! ```text
//! tihar-storefront [CONFIG_PATH]
//! ```
//!
//! Reads one command per line from stdin and prints each reply as JSON.
//! Type `help` for the command list. The config path may also come from
//! `TIHAR_CONFIG`; see `state::config` for the file format.

use std::path::PathBuf;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    tihar_storefront::run(config_path).await
}
