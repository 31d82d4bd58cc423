//! # Lookup Providers
//!
//! Contracts for the collaborators that feed a domain report. Concrete
//! implementations live in `domval-core`; tests swap in stubs.

use async_trait::async_trait;

use crate::domain::DomainName;
use crate::error::LookupError;
use crate::records::{ChainReport, DnsReport, TokenizationRecord, WhoisReport};

/// Resolves the DNS record types that indicate a name is in use.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn check(&self, domain: &DomainName) -> Result<DnsReport, LookupError>;
}

/// Fetches and parses registry WHOIS data.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    async fn lookup(&self, domain: &DomainName) -> Result<WhoisReport, LookupError>;
}

/// Looks up a name on a blockchain name service.
#[async_trait]
pub trait ChainResolver: Send + Sync {
    async fn resolve(&self, domain: &DomainName) -> Result<ChainReport, LookupError>;
}

/// Reports whether a domain has been tokenized and how the token is used.
///
/// Today only a simulated provider exists; a real integration plugs in here
/// without touching the valuation engine.
#[async_trait]
pub trait TokenizationProvider: Send + Sync {
    async fn check(&self, domain: &DomainName) -> Result<TokenizationRecord, LookupError>;
}
