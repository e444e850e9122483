//! Diagnostic sink used by the resolver and the duplicate checker

use std::error::Error;

use tracing::{error, info};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Informational fallback notice
    Info,
    /// Failure or duplicate conflict
    Error,
}

/// Receiver for leveled diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, level: DiagnosticLevel, message: &str, cause: Option<&dyn Error>);
}

/// Sink forwarding to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: DiagnosticLevel, message: &str, cause: Option<&dyn Error>) {
        match (level, cause) {
            (DiagnosticLevel::Info, None) => info!("{}", message),
            (DiagnosticLevel::Info, Some(cause)) => info!(cause = %cause, "{}", message),
            (DiagnosticLevel::Error, None) => error!("{}", message),
            (DiagnosticLevel::Error, Some(cause)) => error!(cause = %cause, "{}", message),
        }
    }
}
