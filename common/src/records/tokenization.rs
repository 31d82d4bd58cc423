use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainName;

/// Tokenization status of a domain, as reported by a [`crate::providers::TokenizationProvider`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizationRecord {
    pub domain: DomainName,
    pub is_tokenized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<TokenizedRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_rights: Option<TokenRights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defi: Option<DefiStatus>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cross_chain: BTreeMap<String, CrossChainPresence>,
    pub eligibility: Eligibility,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenizationRecord {
    pub fn untokenized(domain: DomainName, eligibility: Eligibility) -> Self {
        Self {
            domain,
            is_tokenized: false,
            chain: None,
            record: None,
            token_rights: None,
            defi: None,
            cross_chain: BTreeMap::new(),
            eligibility,
            checked_at: Utc::now(),
            error: None,
        }
    }

    pub fn failed(domain: DomainName, error: impl ToString) -> Self {
        let mut record = Self::untokenized(domain, Eligibility::default());
        record.error = Some(error.to_string());
        record
    }
}

/// On-chain registry entry mirroring the domain's DNS data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizedRecord {
    pub token_id: String,
    pub owner: String,
    pub resolver: String,
    pub records: BTreeMap<String, String>,
    pub registration_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub sync_status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenRights {
    pub total: u32,
    pub available: u32,
    pub locked: u32,
    pub breakdown: BTreeMap<String, u32>,
    pub fractional_owners: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefiStatus {
    pub is_collateral: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lending_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowed_amount: Option<f64>,
    pub yield_generation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking_rewards: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrossChainPresence {
    pub contract_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    pub bridged: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub note: String,
}
