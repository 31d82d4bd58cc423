//! # Domain Name Model
//!
//! The normalized form of a user-supplied domain. Parsing trims surrounding
//! whitespace and lower-cases the input; everything downstream assumes that
//! normalization already happened.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffixes served by blockchain name services rather than ICANN registries.
pub const BLOCKCHAIN_SUFFIXES: &[&str] = &[
    ".eth",
    ".crypto",
    ".nft",
    ".x",
    ".wallet",
    ".bitcoin",
    ".dao",
    ".888",
    ".zil",
    ".blockchain",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain cannot be empty")]
    Empty,

    #[error("Domain cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final label with its leading dot, e.g. `.com`.
    pub fn suffix(&self) -> Option<&str> {
        self.0.rfind('.').map(|idx| &self.0[idx..])
    }

    /// Text before the first dot.
    pub fn label(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    pub fn is_blockchain(&self) -> bool {
        BLOCKCHAIN_SUFFIXES
            .iter()
            .any(|suffix| self.0.ends_with(suffix))
    }

    pub fn has_suffix(&self, suffixes: &[&str]) -> bool {
        suffixes.iter().any(|suffix| self.0.ends_with(suffix))
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().to_lowercase();

        if clean.is_empty() {
            return Err(DomainError::Empty);
        }

        if clean.chars().any(char::is_whitespace) {
            return Err(DomainError::Whitespace(clean));
        }

        Ok(Self(clean))
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
