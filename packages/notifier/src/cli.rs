//! Command line interface of `campfire-notify`.

use std::sync::Arc;

use clap::Parser;

use crate::{
    config::CampfireConfig,
    diagnostic::DiagnosticSink,
    notifier::Notifier,
    policy::{BuildResult, NotifyPolicy, clean_flag, clean_setting},
};

/// Exit status when the message was posted, skipped, or failed without `--strict`
pub const EXIT_OK: i32 = 0;
/// Exit status for a failed notification under `--strict`
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "campfire-notify", version, about = "Post a message into a Campfire room")]
pub struct Args {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Campfire subdomain (e.g. `acme` for acme.campfirenow.com)
    #[arg(long)]
    pub domain: String,

    /// Exact name of the room to post into
    #[arg(long)]
    pub room: String,

    /// Message to post
    #[arg(long)]
    pub message: String,

    /// Fixed base URL instead of https://{domain}.campfirenow.com
    /// (`""`, `(Default)` and `(System Default)` mean unset)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only post when the build failed, is unstable, or recovered.
    /// Takes an optional `true`/`false`; unset markers fall back to off
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub only_on_failure_or_recovery: Option<String>,

    /// Result of the build being announced
    #[arg(long, value_enum, ignore_case = true)]
    pub result: Option<BuildResult>,

    /// Result of the previous build
    #[arg(long, value_enum, ignore_case = true)]
    pub previous_result: Option<BuildResult>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Exit with status 1 when the message could not be posted
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Campfire configuration selected by the flags.
    pub fn config(&self) -> CampfireConfig {
        match clean_setting(self.base_url.as_deref()) {
            Some(base_url) => CampfireConfig::default().with_base_url(base_url),
            None => CampfireConfig::default(),
        }
    }

    /// Notification gate selected by the flags; off unless asked for.
    pub fn policy(&self) -> NotifyPolicy {
        NotifyPolicy::resolve(clean_flag(self.only_on_failure_or_recovery.as_deref()), false)
    }
}

/// Run one notification and return the process exit status.
pub async fn run(args: &Args, sink: Arc<dyn DiagnosticSink>) -> i32 {
    if !args.policy().should_notify(args.result, args.previous_result) {
        tracing::info!(
            "Skipping notification: build result {:?} is neither a failure nor a recovery",
            args.result
        );
        return EXIT_OK;
    }

    let notifier = Notifier::new(args.config(), sink);
    match notifier
        .try_notify(&args.email, &args.password, &args.domain, &args.room, &args.message)
        .await
    {
        Ok(_) => EXIT_OK,
        Err(e) => {
            notifier.report_failure(&e);
            if args.strict { EXIT_FAILURE } else { EXIT_OK }
        }
    }
}
