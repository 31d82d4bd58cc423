//! # Lookup Records
//!
//! Plain data reported by the lookup collaborators. Every record carries an
//! optional `error` so that a failed lookup still produces something the
//! report can show.

pub mod chain;
pub mod dns;
pub mod tokenization;
pub mod whois;

pub use chain::{ChainKind, ChainReport};
pub use dns::{DnsReport, RecordType};
pub use tokenization::{
    CrossChainPresence, DefiStatus, Eligibility, TokenRights, TokenizationRecord, TokenizedRecord,
};
pub use whois::WhoisReport;
