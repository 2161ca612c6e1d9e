//! Diagnostic sink for the fire-and-forget `notify` entry point.

/// Fixed line reported when a notification could not be completed.
pub const COULD_NOT_CONNECT: &str = "Could not connect to Campfire";

/// Destination of the failure line.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, line: &str);
}

/// Writes diagnostics to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn report(&self, line: &str) {
        println!("{line}");
    }
}
