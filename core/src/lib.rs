//! # Domval Core
//!
//! * **[`valuation`]**: the deterministic scoring engine.
//! * **[`lookup`]**: DNS, WHOIS and simulated chain/tokenization providers.
//! * **[`analyzer`]**: runs the providers and the engine for one domain.

pub mod analyzer;
pub mod lookup;
pub mod valuation;

pub use analyzer::{AnalyzeError, DomainAnalyzer, DomainReport};
pub use valuation::{Confidence, Engine, ValuationResult};
