//! Splits a domain into label and suffix and derives the structural signals
//! the scoring model works from.

/// A domain split on its last dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationInput {
    /// Everything before the final label, e.g. `app` or `www.example`.
    pub name: String,
    /// The final label with its leading dot, lower-cased. Empty when the
    /// domain had no separator at all.
    pub suffix: String,
}

impl ValuationInput {
    pub fn parse(domain: &str) -> Self {
        match domain.rsplit_once('.') {
            Some((name, tld)) => Self {
                name: name.to_string(),
                suffix: format!(".{}", tld.to_lowercase()),
            },
            None => Self {
                name: domain.to_string(),
                suffix: String::new(),
            },
        }
    }

    /// True when no suffix could be split off and nothing can be scored.
    pub fn is_unscorable(&self) -> bool {
        self.suffix.is_empty()
    }
}

/// Structural facts about a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signals {
    /// Unicode scalar values in the label.
    pub length: usize,
    pub has_digits: bool,
    pub has_hyphen: bool,
    /// Vacuously true for an empty label.
    pub all_letters: bool,
    pub mixed_case: bool,
}

impl Signals {
    pub fn of(name: &str) -> Self {
        let mut signals = Signals {
            all_letters: true,
            ..Signals::default()
        };
        let mut has_upper = false;
        let mut has_lower = false;

        for c in name.chars() {
            signals.length += 1;
            signals.has_digits |= c.is_numeric();
            signals.has_hyphen |= c == '-';
            signals.all_letters &= c.is_alphabetic();
            has_upper |= c.is_uppercase();
            has_lower |= c.is_lowercase();
        }

        signals.mixed_case = has_upper && has_lower;
        signals
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
