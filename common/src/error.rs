//! Error types for the lookup collaborators.

use std::time::Duration;

use thiserror::Error;

/// Errors a lookup provider can hit while talking to the outside world.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} lookup timed out after {after:?}")]
    Timeout { service: &'static str, after: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("No WHOIS server found for domain: {0}")]
    NoWhoisServer(String),

    #[error("Unsupported blockchain domain type: {0}")]
    UnsupportedSuffix(String),
}
