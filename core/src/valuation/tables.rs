use std::collections::{HashMap, HashSet};

/// Suffix score used when a suffix has no entry in the premium table.
pub const UNKNOWN_SUFFIX_SCORE: f64 = 1.0;

const PREMIUM_WORDS: &[&str] = &[
    "app", "web", "tech", "crypto", "blockchain", "ai", "ml", "data", "cloud", "api", "dev",
    "code", "digital", "online", "smart", "auto", "health", "finance", "bank", "pay", "shop",
    "store", "game", "play", "social", "network", "security", "privacy",
];

const DICTIONARY_WORDS: &[&str] = &[
    "app", "web", "net", "tech", "data", "info", "news", "shop", "store", "game", "play", "work",
    "home", "life", "love", "time", "world", "best", "new", "top", "first", "last", "good",
    "great", "super",
];

const BRAND_PREFIXES: &[&str] = &["web", "app", "my", "get", "the", "new", "top", "best"];
const BRAND_SUFFIXES: &[&str] = &["app", "web", "net", "tech", "hub", "lab", "pro", "max"];

const SUFFIX_PREMIUMS: &[(&str, f64)] = &[
    (".com", 1.0),
    (".net", 0.7),
    (".org", 0.6),
    (".io", 0.8),
    (".co", 0.6),
    (".app", 0.7),
    (".dev", 0.6),
    (".tech", 0.5),
    (".eth", 0.9),
    (".crypto", 0.8),
    (".nft", 0.7),
];

/// Read-only word lists and suffix coefficients the scoring model consults.
///
/// Built once and handed to [`super::Engine`]; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct ValuationTables {
    pub premium_words: Vec<String>,
    pub dictionary: HashSet<String>,
    pub brand_prefixes: Vec<String>,
    pub brand_suffixes: Vec<String>,
    /// Coefficient in `[0, 1]` per suffix, keyed with the leading dot.
    pub suffix_premiums: HashMap<String, f64>,
}

impl ValuationTables {
    pub fn suffix_premium(&self, suffix: &str) -> Option<f64> {
        self.suffix_premiums.get(suffix).copied()
    }
}

impl Default for ValuationTables {
    fn default() -> Self {
        Self {
            premium_words: to_owned(PREMIUM_WORDS),
            dictionary: DICTIONARY_WORDS.iter().map(|word| word.to_string()).collect(),
            brand_prefixes: to_owned(BRAND_PREFIXES),
            brand_suffixes: to_owned(BRAND_SUFFIXES),
            suffix_premiums: SUFFIX_PREMIUMS
                .iter()
                .map(|(suffix, premium)| (suffix.to_string(), *premium))
                .collect(),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}
