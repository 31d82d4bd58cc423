use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record types probed when checking whether a name is in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Mx,
    Ns,
    Txt,
}

impl RecordType {
    pub const PROBED: [RecordType; 5] = [Self::A, Self::Aaaa, Self::Mx, Self::Ns, Self::Txt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DnsReport {
    pub available: bool,
    pub suffix: String,
    pub has_records: bool,
    pub record_types: Vec<RecordType>,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DnsReport {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            available: false,
            suffix: suffix.into(),
            has_records: false,
            record_types: Vec::new(),
            checked_at: Utc::now(),
            error: None,
        }
    }

    pub fn failed(suffix: impl Into<String>, error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::new(suffix)
        }
    }

    pub fn add_record_type(&mut self, record_type: RecordType) {
        self.has_records = true;
        if !self.record_types.contains(&record_type) {
            self.record_types.push(record_type);
        }
    }
}
