//! Cross-crate tests for the valuation engine and the analysis service.

mod analysis;
mod valuation;
