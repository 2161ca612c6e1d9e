//! Shared utilities for campfire-notify.

pub mod logger;

pub use logger::setup_logger;
