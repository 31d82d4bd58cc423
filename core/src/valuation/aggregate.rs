//! Folds a [`FactorSet`] into a bounded estimate and a confidence tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::FactorSet;

pub const BASE_VALUE: f64 = 100.0;
pub const MIN_VALUE: u64 = 10;
pub const MAX_VALUE: u64 = 1_000_000;

const HIGH_CONFIDENCE_POINTS: u8 = 6;
const MEDIUM_CONFIDENCE_POINTS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated value in whole USD.
///
/// The word bonus is added after the multiplicative length, character and
/// suffix terms, so a zero in any of those cannot be offset by keywords; only
/// the clamp lifts it back to [`MIN_VALUE`].
pub fn estimate(factors: &FactorSet) -> u64 {
    let mut multiplier: f64 = 1.0;
    multiplier *= (factors.length_score / 10.0) * 2.0;
    multiplier *= factors.character_score / 5.0;
    multiplier *= factors.suffix_score / 5.0;
    multiplier += factors.word_score / 10.0;

    if factors.brandable {
        multiplier *= 1.5;
    }
    if factors.pronounceable {
        multiplier *= 1.2;
    }

    if factors.has_digits {
        multiplier *= 0.7;
    }
    if factors.has_hyphen {
        multiplier *= 0.6;
    }

    let value: f64 = (BASE_VALUE * multiplier).clamp(MIN_VALUE as f64, MAX_VALUE as f64);
    value as u64
}

/// Point rubric, independent of the estimate itself. At most 8 points.
pub fn confidence(factors: &FactorSet) -> Confidence {
    let mut points: u8 = 0;

    if factors.length <= 5 {
        points += 2;
    }
    if factors.brandable {
        points += 2;
    }
    if factors.pronounceable {
        points += 1;
    }
    if factors.suffix_score >= 4.0 {
        points += 2;
    }
    if factors.is_clean() {
        points += 1;
    }

    match points {
        p if p >= HIGH_CONFIDENCE_POINTS => Confidence::High,
        p if p >= MEDIUM_CONFIDENCE_POINTS => Confidence::Medium,
        _ => Confidence::Low,
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
