use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{Instrument, info_span};

use crate::terminal::{report, spinner};
use domval_common::{config::Config, domain::DomainName};
use domval_core::{DomainAnalyzer, DomainReport};

/// Full analysis: lookups for each domain in turn, then one report.
pub async fn analyze(domains: &[DomainName], cfg: &Config) -> anyhow::Result<()> {
    let analyzer = DomainAnalyzer::from_config(cfg);
    let start_time: Instant = Instant::now();
    let mut reports: Vec<DomainReport> = Vec::with_capacity(domains.len());

    for domain in domains {
        let span = info_span!("analyze", indicatif.pb_show = true);
        let running: Arc<AtomicBool> = Arc::new(AtomicBool::new(true));
        let spinner_handle = spinner::start_lookup_spinner(
            span.clone(),
            format!("Looking up {domain}..."),
            running.clone(),
        );

        let outcome = analyzer.analyze(domain.as_str(), cfg).instrument(span).await;

        running.store(false, Ordering::Relaxed);
        let _ = spinner_handle.join();

        reports.push(outcome?);
    }

    report::emit(&reports, start_time.elapsed(), cfg)
}
