//! # Valuation Engine
//!
//! Maps a domain string to an estimated USD value, a confidence tier and the
//! factor breakdown behind them.
//!
//! The pipeline is one-way and pure:
//! 1. [`lexical`] splits the domain and reads structural signals.
//! 2. [`scoring`] turns signals into sub-scores and qualities.
//! 3. [`aggregate`] folds those into a bounded estimate and a confidence tier.
//! 4. [`explain`] renders the factors as a rationale.
//!
//! [`Engine`] holds only read-only tables, so a single instance can be shared
//! across threads and evaluated concurrently.

pub mod aggregate;
pub mod explain;
pub mod lexical;
pub mod scoring;
pub mod tables;

use domval_common::records::TokenizationRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use aggregate::{Confidence, MAX_VALUE, MIN_VALUE};
pub use lexical::ValuationInput;
pub use scoring::FactorSet;
pub use tables::ValuationTables;

pub const CURRENCY: &str = "USD";
const INVALID_FORMAT_REASON: &str = "Invalid domain format";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimated_value: u64,
    pub currency: String,
    pub confidence: Confidence,
    pub factors: FactorSet,
    pub reasoning: String,
}

/// Tokenization facts that may be folded into the rationale.
///
/// Never changes the estimate or the confidence tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenizationContext {
    pub tokenized: bool,
    pub chain: Option<String>,
    pub lending_platform: Option<String>,
    pub collateral_value: Option<f64>,
    pub borrowed_amount: Option<f64>,
}

impl From<&TokenizationRecord> for TokenizationContext {
    fn from(record: &TokenizationRecord) -> Self {
        let collateral = record.defi.as_ref().filter(|defi| defi.is_collateral);

        Self {
            tokenized: record.is_tokenized,
            chain: record.chain.clone(),
            lending_platform: collateral.and_then(|defi| defi.lending_platform.clone()),
            collateral_value: collateral.and_then(|defi| defi.collateral_value),
            borrowed_amount: collateral.and_then(|defi| defi.borrowed_amount),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Engine {
    tables: ValuationTables,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: ValuationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ValuationTables {
        &self.tables
    }

    /// Values a trimmed, lower-cased domain. Never fails: a domain without a
    /// separator gets the floor value with low confidence.
    pub fn evaluate(&self, domain: &str) -> ValuationResult {
        let input = ValuationInput::parse(domain);
        if input.is_unscorable() {
            return unscorable();
        }

        let factors = FactorSet::score(&input, &self.tables);
        let reasoning = explain::reasoning(&factors);
        finish(factors, reasoning)
    }

    pub fn evaluate_with_context(
        &self,
        domain: &str,
        context: Option<&TokenizationContext>,
    ) -> ValuationResult {
        let Some(context) = context else {
            return self.evaluate(domain);
        };

        let input = ValuationInput::parse(domain);
        if input.is_unscorable() {
            return unscorable();
        }

        let factors = FactorSet::score(&input, &self.tables);
        let reasoning = explain::reasoning_with_context(&factors, context);
        finish(factors, reasoning)
    }

    /// Values many domains in parallel, preserving input order.
    pub fn evaluate_batch<S>(&self, domains: &[S]) -> Vec<ValuationResult>
    where
        S: AsRef<str> + Sync,
    {
        domains
            .par_iter()
            .map(|domain| self.evaluate(domain.as_ref()))
            .collect()
    }
}

fn finish(factors: FactorSet, reasoning: String) -> ValuationResult {
    ValuationResult {
        estimated_value: aggregate::estimate(&factors),
        currency: CURRENCY.to_string(),
        confidence: aggregate::confidence(&factors),
        factors,
        reasoning,
    }
}

fn unscorable() -> ValuationResult {
    ValuationResult {
        estimated_value: MIN_VALUE,
        currency: CURRENCY.to_string(),
        confidence: Confidence::Low,
        factors: FactorSet::default(),
        reasoning: INVALID_FORMAT_REASON.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_app_com() {
        let result = Engine::new().evaluate("app.com");

        assert_eq!(result.estimated_value, 522);
        assert_eq!(result.currency, "USD");
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.factors.brandable);
        assert_eq!(
            result.reasoning,
            "Very short domain (premium); Brandable name; Easy to pronounce; Contains valuable keywords"
        );
    }

    #[test]
    fn evaluate_reference_domains() {
        let engine = Engine::new();
        let cases = [
            ("test123.com", 60, Confidence::Medium, false),
            ("verylongdomainnamethatishard.com", 64, Confidence::Medium, false),
            ("test-domain.com", 41, Confidence::Medium, false),
            ("myname.eth", 251, Confidence::High, true),
            ("webhub.io", 279, Confidence::High, true),
            ("xkcd.zzz", 38, Confidence::Medium, false),
        ];

        for (domain, value, confidence, brandable) in cases {
            let result = engine.evaluate(domain);
            assert_eq!(result.estimated_value, value, "{domain}");
            assert_eq!(result.confidence, confidence, "{domain}");
            assert_eq!(result.factors.brandable, brandable, "{domain}");
        }
    }

    #[test]
    fn evaluate_without_separator_degrades() {
        let result = Engine::new().evaluate("localhost");

        assert_eq!(result.estimated_value, MIN_VALUE);
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.factors.length, 0);
        assert_eq!(result.reasoning, INVALID_FORMAT_REASON);
    }

    #[test]
    fn context_changes_reasoning_only() {
        let engine = Engine::new();
        let context = TokenizationContext {
            tokenized: true,
            chain: Some("ethereum".into()),
            ..TokenizationContext::default()
        };

        let plain = engine.evaluate("app.com");
        let enriched = engine.evaluate_with_context("app.com", Some(&context));

        assert_eq!(plain.estimated_value, enriched.estimated_value);
        assert_eq!(plain.confidence, enriched.confidence);
        assert_eq!(plain.factors, enriched.factors);
        assert!(enriched.reasoning.ends_with("; Tokenized on ethereum"));
        assert_eq!(engine.evaluate_with_context("app.com", None), plain);
    }

    #[test]
    fn custom_tables_are_honoured() {
        let mut tables = ValuationTables::default();
        tables.suffix_premiums.insert(".zzz".into(), 1.0);
        let engine = Engine::with_tables(tables);

        assert_eq!(engine.evaluate("xkcd.zzz").factors.suffix_score, 5.0);
    }

    #[test]
    fn batch_matches_sequential_evaluation() {
        let engine = Engine::new();
        let domains = ["app.com", "localhost", "test123.com", "webhub.io"];

        let batch = engine.evaluate_batch(&domains);
        let sequential: Vec<ValuationResult> =
            domains.iter().map(|domain| engine.evaluate(domain)).collect();

        assert_eq!(batch, sequential);
    }

    #[test]
    fn result_serializes_with_snake_case_keys() {
        let json = serde_json::to_value(Engine::new().evaluate("app.com")).unwrap();

        assert_eq!(json["estimated_value"], 522);
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["factors"]["suffix_score"], 5.0);
        assert_eq!(json["factors"]["has_hyphen"], false);
    }
}
