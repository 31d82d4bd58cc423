//! Concrete lookup providers.
//!
//! [`dns`] and [`whois`] talk to real servers; [`chain`] and [`tokenization`]
//! are simulations standing in for integrations that do not exist yet.

pub mod chain;
pub mod dns;
pub mod tokenization;
pub mod whois;

pub use chain::SimulatedChainResolver;
pub use dns::DnsChecker;
pub use tokenization::SimulatedTokenization;
pub use whois::WhoisClient;
