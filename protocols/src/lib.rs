//! Wire formats spoken by the lookup collaborators.

pub mod dns;
pub mod whois;
