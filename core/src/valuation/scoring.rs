//! The four sub-scores and two boolean qualities of a label.
//!
//! Each score lives on its own scale; [`super::aggregate`] weights them.

use serde::{Deserialize, Serialize};

use super::lexical::{Signals, ValuationInput};
use super::tables::{UNKNOWN_SUFFIX_SCORE, ValuationTables};

const VOWELS: &str = "aeiou";
const MIN_CONSONANT_RATIO: f64 = 0.5;
const MAX_CONSONANT_RATIO: f64 = 4.0;
const BRANDABLE_LENGTH: std::ops::RangeInclusive<usize> = 3..=12;
const COMPOUND_MIN_LENGTH: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub length: usize,
    pub length_score: f64,
    pub character_score: f64,
    pub word_score: f64,
    pub suffix_score: f64,
    pub pronounceable: bool,
    pub brandable: bool,
    pub has_digits: bool,
    pub has_hyphen: bool,
}

impl FactorSet {
    pub fn score(input: &ValuationInput, tables: &ValuationTables) -> Self {
        let signals = Signals::of(&input.name);
        let pronounceable = is_pronounceable(&input.name);

        Self {
            length: signals.length,
            length_score: length_score(signals.length),
            character_score: character_score(&signals),
            word_score: word_score(&input.name, tables),
            suffix_score: suffix_score(&input.suffix, tables),
            pronounceable,
            brandable: is_brandable(&signals, pronounceable),
            has_digits: signals.has_digits,
            has_hyphen: signals.has_hyphen,
        }
    }

    /// Neither digits nor hyphens in the label.
    pub fn is_clean(&self) -> bool {
        !self.has_digits && !self.has_hyphen
    }
}

/// Coarse staircase: shorter labels are scarcer.
pub fn length_score(length: usize) -> f64 {
    match length {
        0..=3 => 10.0,
        4..=5 => 8.0,
        6..=7 => 6.0,
        8..=10 => 4.0,
        11..=15 => 2.0,
        _ => 1.0,
    }
}

pub fn character_score(signals: &Signals) -> f64 {
    let mut score: f64 = 5.0;

    if signals.has_digits {
        score -= 2.0;
    }
    if signals.has_hyphen {
        score -= 1.5;
    }
    if signals.all_letters {
        score += 1.0;
    }
    if signals.mixed_case {
        score -= 0.5;
    }

    score.max(0.0)
}

pub fn word_score(name: &str, tables: &ValuationTables) -> f64 {
    let lower: String = name.to_lowercase();
    let mut score: f64 = 0.0;

    for word in &tables.premium_words {
        if lower.contains(word.as_str()) {
            score += 3.0;
        }
    }

    if tables.dictionary.contains(&lower) {
        score += 2.0;
    }

    if is_compound(&lower, tables) {
        score += 1.0;
    }

    score
}

pub fn suffix_score(suffix: &str, tables: &ValuationTables) -> f64 {
    tables
        .suffix_premium(suffix)
        .map(|premium| premium * 5.0)
        .unwrap_or(UNKNOWN_SUFFIX_SCORE)
}

/// Consonant-to-vowel ratio check over the letters of the label.
pub fn is_pronounceable(name: &str) -> bool {
    let mut vowels: u32 = 0;
    let mut consonants: u32 = 0;

    for c in name.to_lowercase().chars() {
        if VOWELS.contains(c) {
            vowels += 1;
        } else if c.is_alphabetic() {
            consonants += 1;
        }
    }

    if vowels == 0 {
        return false;
    }

    let ratio: f64 = f64::from(consonants) / f64::from(vowels);
    (MIN_CONSONANT_RATIO..=MAX_CONSONANT_RATIO).contains(&ratio)
}

pub fn is_brandable(signals: &Signals, pronounceable: bool) -> bool {
    BRANDABLE_LENGTH.contains(&signals.length)
        && !signals.has_digits
        && !signals.has_hyphen
        && pronounceable
}

/// Looks for a brand affix glued onto at least three more characters,
/// as in "webhub" or "getfit".
fn is_compound(lower: &str, tables: &ValuationTables) -> bool {
    let length: usize = lower.chars().count();
    if length < COMPOUND_MIN_LENGTH {
        return false;
    }

    let fits = |affix: &String| length > affix.chars().count() + 2;

    tables
        .brand_prefixes
        .iter()
        .any(|prefix| lower.starts_with(prefix.as_str()) && fits(prefix))
        || tables
            .brand_suffixes
            .iter()
            .any(|suffix| lower.ends_with(suffix.as_str()) && fits(suffix))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
