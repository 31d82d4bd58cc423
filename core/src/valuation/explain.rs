//! Human-readable rationale for a valuation.

use super::scoring::FactorSet;
use super::TokenizationContext;

pub const FALLBACK_REASON: &str = "Standard domain name";
const SEPARATOR: &str = "; ";

pub fn reasoning(factors: &FactorSet) -> String {
    join(lexical_clauses(factors))
}

/// Lexical clauses followed by whatever the tokenization context adds.
pub fn reasoning_with_context(factors: &FactorSet, context: &TokenizationContext) -> String {
    let mut clauses = lexical_clauses(factors);
    clauses.extend(tokenization_clauses(context));
    join(clauses)
}

fn lexical_clauses(factors: &FactorSet) -> Vec<String> {
    let mut clauses: Vec<String> = Vec::new();

    match factors.length {
        0..=3 => clauses.push("Very short domain (premium)".into()),
        4..=5 => clauses.push("Short and memorable".into()),
        16.. => clauses.push("Long domain name".into()),
        _ => {}
    }

    if factors.brandable {
        clauses.push("Brandable name".into());
    }
    if factors.pronounceable {
        clauses.push("Easy to pronounce".into());
    }
    if factors.word_score > 2.0 {
        clauses.push("Contains valuable keywords".into());
    }
    if factors.has_digits {
        clauses.push("Contains numbers (reduces value)".into());
    }
    if factors.has_hyphen {
        clauses.push("Contains hyphens (reduces value)".into());
    }

    clauses
}

fn tokenization_clauses(context: &TokenizationContext) -> Vec<String> {
    if !context.tokenized {
        return Vec::new();
    }

    let mut clauses: Vec<String> = vec![match &context.chain {
        Some(chain) => format!("Tokenized on {chain}"),
        None => "Tokenized".to_string(),
    }];

    if let Some(platform) = &context.lending_platform {
        let mut clause = format!("Used as DeFi collateral on {platform}");
        if let (Some(collateral), Some(borrowed)) = (context.collateral_value, context.borrowed_amount) {
            clause.push_str(&format!(" (collateral ${collateral:.0}, borrowed ${borrowed:.0})"));
        }
        clauses.push(clause);
    }

    clauses
}

fn join(clauses: Vec<String>) -> String {
    if clauses.is_empty() {
        return FALLBACK_REASON.to_string();
    }
    clauses.join(SEPARATOR)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
