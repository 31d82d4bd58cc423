//! Simulated tokenization provider.
//!
//! Stands in for a tokenization registry API. Short and crypto-flavoured
//! names are reported as tokenized, with fixed rights, DeFi and cross-chain
//! data attached.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;

use domval_common::domain::DomainName;
use domval_common::error::LookupError;
use domval_common::providers::TokenizationProvider;
use domval_common::records::{
    CrossChainPresence, DefiStatus, Eligibility, TokenRights, TokenizationRecord, TokenizedRecord,
};

use super::chain::{address, bech32};

const TOKENIZABLE_SUFFIXES: &[&str] = &[".com", ".net", ".org", ".io", ".eth", ".crypto"];
const TRADITIONAL_SUFFIXES: &[&str] = &[".com", ".net", ".org", ".io", ".co", ".me", ".tv", ".cc", ".ws"];
const BRIDGEABLE_SUFFIXES: &[&str] = &[".eth", ".crypto"];
const PREMIUM_LABEL_WORDS: &[&str] = &[
    "crypto", "defi", "nft", "web3", "blockchain", "ethereum", "bitcoin",
];

const PRIMARY_CHAIN: &str = "ethereum";
const LENDING_PLATFORM: &str = "DOMA Lending";
const TOKEN_ID_LEN: usize = 20;

#[derive(Debug, Default)]
pub struct SimulatedTokenization;

#[async_trait]
impl TokenizationProvider for SimulatedTokenization {
    async fn check(&self, domain: &DomainName) -> Result<TokenizationRecord, LookupError> {
        let eligibility: Eligibility = eligibility(domain);

        if !is_tokenized(domain) {
            return Ok(TokenizationRecord::untokenized(domain.clone(), eligibility));
        }
        debug!("{domain} is tokenized (simulated)");

        let token_id: String = token_id(domain);
        let mut record = TokenizationRecord::untokenized(domain.clone(), eligibility);
        record.is_tokenized = true;
        record.chain = Some(PRIMARY_CHAIN.to_string());
        record.record = Some(tokenized_record(&token_id));
        record.token_rights = Some(token_rights());
        record.defi = Some(defi_status());
        record.cross_chain = cross_chain(&token_id);
        Ok(record)
    }
}

pub fn eligibility(domain: &DomainName) -> Eligibility {
    let (eligible, note) = if domain.has_suffix(TRADITIONAL_SUFFIXES) {
        (true, "Traditional domain eligible for tokenization")
    } else if domain.has_suffix(BRIDGEABLE_SUFFIXES) {
        (true, "Blockchain domain eligible for bridging")
    } else {
        (false, "Domain type not supported for tokenization")
    };

    Eligibility {
        eligible,
        note: note.to_string(),
    }
}

fn is_tokenized(domain: &DomainName) -> bool {
    if !domain.has_suffix(TOKENIZABLE_SUFFIXES) {
        return false;
    }

    let label: &str = domain.label();
    let length: usize = label.chars().count();

    if length <= 3 {
        return true;
    }
    if PREMIUM_LABEL_WORDS.iter().any(|word| label.contains(word)) {
        return true;
    }
    (4..=8).contains(&length) && length % 2 == 0
}

/// Hex of the domain bytes, cut to [`TOKEN_ID_LEN`] characters.
fn token_id(domain: &DomainName) -> String {
    domain
        .as_str()
        .bytes()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>()
        .chars()
        .take(TOKEN_ID_LEN)
        .collect()
}

fn tokenized_record(token_id: &str) -> TokenizedRecord {
    let now = Utc::now();
    let records: BTreeMap<String, String> = [
        ("A", "192.168.1.1".to_string()),
        ("AAAA", "2001:db8::1".to_string()),
        ("TXT", "v=spf1 include:_spf.google.com ~all".to_string()),
        ("ETH", address('3')),
        ("BTC", bech32('4')),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    TokenizedRecord {
        token_id: token_id.to_string(),
        owner: address('1'),
        resolver: address('2'),
        records,
        registration_date: now - Duration::days(365),
        expiration_date: now + Duration::days(365),
        last_updated: now,
        sync_status: "synced".to_string(),
    }
}

fn token_rights() -> TokenRights {
    let breakdown: BTreeMap<String, u32> = [
        ("ownership", 500),
        ("revenue", 300),
        ("governance", 150),
        ("utility", 50),
    ]
    .into_iter()
    .map(|(right, amount)| (right.to_string(), amount))
    .collect();

    TokenRights {
        total: 1000,
        available: 750,
        locked: 250,
        breakdown,
        fractional_owners: vec![address('a'), address('b'), address('c')],
    }
}

fn defi_status() -> DefiStatus {
    DefiStatus {
        is_collateral: true,
        lending_platform: Some(LENDING_PLATFORM.to_string()),
        collateral_value: Some(50_000.0),
        borrowed_amount: Some(30_000.0),
        yield_generation: true,
        staking_rewards: Some(125.50),
    }
}

fn cross_chain(token_id: &str) -> BTreeMap<String, CrossChainPresence> {
    let mut presence = BTreeMap::new();
    presence.insert(
        "ethereum".to_string(),
        CrossChainPresence {
            contract_address: address('e'),
            token_id: Some(token_id.to_string()),
            bridged: false,
        },
    );
    presence.insert(
        "polygon".to_string(),
        CrossChainPresence {
            contract_address: address('f'),
            token_id: None,
            bridged: true,
        },
    );
    presence.insert(
        "arbitrum".to_string(),
        CrossChainPresence {
            contract_address: address('d'),
            token_id: None,
            bridged: true,
        },
    );
    presence
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
