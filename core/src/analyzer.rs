//! # Domain Analysis Service
//!
//! Orchestrates one full analysis: tokenization status, registry or chain
//! lookups, then valuation.
//!
//! Lookups are allowed to fail. A failure is kept on the report as the
//! record's `error` field, and valuation runs regardless since it only needs
//! the domain string.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use domval_common::config::Config;
use domval_common::domain::{DomainError, DomainName};
use domval_common::providers::{ChainResolver, DnsLookup, TokenizationProvider, WhoisLookup};
use domval_common::records::{ChainReport, DnsReport, TokenizationRecord, WhoisReport};

use crate::lookup::{DnsChecker, SimulatedChainResolver, SimulatedTokenization, WhoisClient};
use crate::valuation::{Engine, TokenizationContext, ValuationResult};

#[derive(Debug, Error, PartialEq)]
pub enum AnalyzeError {
    #[error(transparent)]
    InvalidDomain(#[from] DomainError),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain: DomainName,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<TokenizationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<ChainReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<DnsReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whois: Option<WhoisReport>,
    pub valuation: ValuationResult,
}

impl DomainReport {
    /// A report carrying only the valuation; lookup sections start empty.
    pub fn valued(domain: DomainName, timestamp: DateTime<Utc>, valuation: ValuationResult) -> Self {
        Self {
            domain,
            timestamp,
            tokenization: None,
            chain: None,
            dns: None,
            whois: None,
            valuation,
        }
    }
}

/// Application service for domain analysis.
///
/// Holds one provider per collaborator plus the valuation [`Engine`].
pub struct DomainAnalyzer {
    dns: Box<dyn DnsLookup>,
    whois: Box<dyn WhoisLookup>,
    chain: Box<dyn ChainResolver>,
    tokenization: Box<dyn TokenizationProvider>,
    engine: Engine,
}

impl DomainAnalyzer {
    pub fn new(
        dns: Box<dyn DnsLookup>,
        whois: Box<dyn WhoisLookup>,
        chain: Box<dyn ChainResolver>,
        tokenization: Box<dyn TokenizationProvider>,
        engine: Engine,
    ) -> Self {
        Self {
            dns,
            whois,
            chain,
            tokenization,
            engine,
        }
    }

    /// Network-backed DNS and WHOIS, simulated chain and tokenization.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Box::new(DnsChecker::from_config(cfg)),
            Box::new(WhoisClient::from_config(cfg)),
            Box::new(SimulatedChainResolver),
            Box::new(SimulatedTokenization),
            Engine::new(),
        )
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs every enabled lookup for `domain` and values it.
    ///
    /// Only an empty or malformed domain string is an error.
    pub async fn analyze(&self, domain: &str, cfg: &Config) -> Result<DomainReport, AnalyzeError> {
        let domain = DomainName::from_str(domain)?;
        info!("Analyzing {domain}");
        let timestamp: DateTime<Utc> = Utc::now();

        if cfg.offline {
            debug!("offline mode, skipping lookups for {domain}");
            let valuation: ValuationResult = self.engine.evaluate(domain.as_str());
            return Ok(DomainReport::valued(domain, timestamp, valuation));
        }

        let tokenization: TokenizationRecord = self.check_tokenization(&domain).await;

        let (mut chain, mut dns, mut whois) = (None, None, None);
        if domain.is_blockchain() {
            chain = Some(self.resolve_chain(&domain).await);
        } else {
            let dns_lookup = async {
                if cfg.no_dns {
                    return None;
                }
                Some(self.check_dns(&domain).await)
            };
            let whois_lookup = async {
                if cfg.no_whois {
                    return None;
                }
                Some(self.lookup_whois(&domain).await)
            };
            (dns, whois) = tokio::join!(dns_lookup, whois_lookup);
        }

        let context: Option<TokenizationContext> = tokenization
            .error
            .is_none()
            .then(|| TokenizationContext::from(&tokenization));
        let valuation: ValuationResult = self
            .engine
            .evaluate_with_context(domain.as_str(), context.as_ref());

        let mut report = DomainReport::valued(domain, timestamp, valuation);
        report.tokenization = Some(tokenization);
        report.chain = chain;
        report.dns = dns;
        report.whois = whois;
        Ok(report)
    }

    async fn check_tokenization(&self, domain: &DomainName) -> TokenizationRecord {
        self.tokenization.check(domain).await.unwrap_or_else(|e| {
            warn!("Tokenization lookup failed: {e}");
            TokenizationRecord::failed(domain.clone(), e)
        })
    }

    async fn resolve_chain(&self, domain: &DomainName) -> ChainReport {
        self.chain.resolve(domain).await.unwrap_or_else(|e| {
            warn!("Blockchain lookup failed: {e}");
            ChainReport::failed(e)
        })
    }

    async fn check_dns(&self, domain: &DomainName) -> DnsReport {
        self.dns.check(domain).await.unwrap_or_else(|e| {
            warn!("DNS lookup failed: {e}");
            DnsReport::failed(domain.suffix().unwrap_or_default(), e)
        })
    }

    async fn lookup_whois(&self, domain: &DomainName) -> WhoisReport {
        self.whois.lookup(domain).await.unwrap_or_else(|e| {
            warn!("WHOIS lookup failed: {e}");
            WhoisReport::failed(e)
        })
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
