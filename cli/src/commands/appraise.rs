use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::terminal::report;
use domval_common::{config::Config, domain::DomainName};
use domval_core::{DomainReport, Engine, ValuationResult};

/// Offline mode: values every name in parallel without touching the network.
pub fn appraise(domains: &[DomainName], cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let timestamp: DateTime<Utc> = Utc::now();

    let valuations: Vec<ValuationResult> = Engine::new().evaluate_batch(domains);
    debug!("valued {} domains offline", valuations.len());

    let reports: Vec<DomainReport> = domains
        .iter()
        .cloned()
        .zip(valuations)
        .map(|(domain, valuation)| DomainReport::valued(domain, timestamp, valuation))
        .collect();

    report::emit(&reports, start_time.elapsed(), cfg)
}
