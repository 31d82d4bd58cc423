//! Simulated blockchain name-service lookups.
//!
//! No chain is contacted: availability follows a fixed taken-list and a
//! length rule, and taken names get placeholder addresses.

use async_trait::async_trait;
use tracing::debug;

use domval_common::domain::DomainName;
use domval_common::error::LookupError;
use domval_common::providers::ChainResolver;
use domval_common::records::{ChainKind, ChainReport};

const UNSTOPPABLE_SUFFIXES: &[&str] = &[
    ".crypto", ".nft", ".x", ".wallet", ".bitcoin", ".dao", ".888", ".zil",
];

const ENS_TAKEN: &[&str] = &["test.eth", "example.eth", "hello.eth", "world.eth"];
const UNSTOPPABLE_TAKEN: &[&str] = &["test.crypto", "example.nft", "hello.x"];

/// Labels this short are treated as already registered.
const MAX_TAKEN_LABEL_LEN: usize = 3;

#[derive(Debug, Default)]
pub struct SimulatedChainResolver;

#[async_trait]
impl ChainResolver for SimulatedChainResolver {
    async fn resolve(&self, domain: &DomainName) -> Result<ChainReport, LookupError> {
        let kind: ChainKind = chain_kind(domain)?;
        let available: bool = is_available(domain, kind);
        debug!("simulated {kind} lookup for {domain}: available={available}");

        let mut report = ChainReport::new(kind);
        report.available = available;
        if !available {
            fill_placeholders(&mut report, kind);
        }
        Ok(report)
    }
}

fn chain_kind(domain: &DomainName) -> Result<ChainKind, LookupError> {
    if domain.has_suffix(&[".eth"]) {
        return Ok(ChainKind::Ens);
    }
    if domain.has_suffix(UNSTOPPABLE_SUFFIXES) {
        return Ok(ChainKind::UnstoppableDomains);
    }
    Err(LookupError::UnsupportedSuffix(
        domain.suffix().unwrap_or_default().to_string(),
    ))
}

fn is_available(domain: &DomainName, kind: ChainKind) -> bool {
    let taken: &[&str] = match kind {
        ChainKind::Ens => ENS_TAKEN,
        ChainKind::UnstoppableDomains => UNSTOPPABLE_TAKEN,
    };
    if taken.contains(&domain.as_str()) {
        return false;
    }
    domain.label().chars().count() > MAX_TAKEN_LABEL_LEN
}

fn fill_placeholders(report: &mut ChainReport, kind: ChainKind) {
    match kind {
        ChainKind::Ens => {
            report.owner = Some(address('a'));
            report.resolver = Some(address('b'));
            report.records.insert("ETH".into(), address('c'));
            report.records.insert("BTC".into(), bech32('d'));
        }
        ChainKind::UnstoppableDomains => {
            report.owner = Some(address('e'));
            report.records.insert("crypto.ETH.address".into(), address('f'));
            report.records.insert("crypto.BTC.address".into(), bech32('g'));
        }
    }
}

pub(crate) fn address(fill: char) -> String {
    format!("0x{}", fill.to_string().repeat(40))
}

pub(crate) fn bech32(fill: char) -> String {
    format!("bc1{}", fill.to_string().repeat(39))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
