//! Campfire notifier library.
//!
//! Logs into a Campfire account, finds a room by name and pastes a message
//! into it. [`notify`] is fire-and-forget and prints a fixed line on failure;
//! [`try_notify`] reports why it failed.

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod domain;
pub mod infrastructure;
pub mod notifier;
pub mod policy;
pub mod usecase;

// Re-export entry points
pub use config::CampfireConfig;
pub use diagnostic::{COULD_NOT_CONNECT, DiagnosticSink, StdoutSink};
pub use notifier::{Notifier, notify, try_notify};
pub use policy::{BuildResult, NotifyPolicy};
pub use usecase::NotifyError;
