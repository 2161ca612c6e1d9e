//! Post a message into a Campfire room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin campfire-notify -- --email user@x.com --password secret \
//!     --domain acme --room general --message hello
//! ```

use std::sync::Arc;

use campfire_notifier::{
    StdoutSink,
    cli::{self, Args, EXIT_OK},
};
use campfire_shared::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let code = cli::run(&args, Arc::new(StdoutSink)).await;
    if code != EXIT_OK {
        std::process::exit(code);
    }
}
