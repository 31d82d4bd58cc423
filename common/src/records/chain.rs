use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The name service a blockchain suffix belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainKind {
    #[serde(rename = "ENS")]
    Ens,
    #[serde(rename = "Unstoppable Domains")]
    UnstoppableDomains,
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ens => f.write_str("ENS"),
            Self::UnstoppableDomains => f.write_str("Unstoppable Domains"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainReport {
    pub available: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChainKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub records: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChainReport {
    pub fn new(kind: ChainKind) -> Self {
        Self {
            available: false,
            kind: Some(kind),
            owner: None,
            resolver: None,
            records: BTreeMap::new(),
            expiry_date: None,
            checked_at: Utc::now(),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            available: false,
            kind: None,
            owner: None,
            resolver: None,
            records: BTreeMap::new(),
            expiry_date: None,
            checked_at: Utc::now(),
            error: Some(error.to_string()),
        }
    }
}
