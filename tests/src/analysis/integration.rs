#![cfg(test)]
use async_trait::async_trait;
use domval_common::config::Config;
use domval_common::domain::DomainName;
use domval_common::error::LookupError;
use domval_common::providers::{ChainResolver, DnsLookup, TokenizationProvider, WhoisLookup};
use domval_common::records::{ChainReport, DnsReport, TokenizationRecord, WhoisReport};
use domval_core::lookup::{SimulatedChainResolver, SimulatedTokenization};
use domval_core::{DomainAnalyzer, DomainReport, Engine};

/// Provider that fails every call, standing in for an unreachable network.
struct Unreachable;

fn unreachable(domain: &DomainName) -> LookupError {
    LookupError::Protocol(format!("no route to registry for {domain}"))
}

#[async_trait]
impl DnsLookup for Unreachable {
    async fn check(&self, domain: &DomainName) -> Result<DnsReport, LookupError> {
        Err(unreachable(domain))
    }
}

#[async_trait]
impl WhoisLookup for Unreachable {
    async fn lookup(&self, domain: &DomainName) -> Result<WhoisReport, LookupError> {
        Err(unreachable(domain))
    }
}

#[async_trait]
impl ChainResolver for Unreachable {
    async fn resolve(&self, domain: &DomainName) -> Result<ChainReport, LookupError> {
        Err(unreachable(domain))
    }
}

#[async_trait]
impl TokenizationProvider for Unreachable {
    async fn check(&self, domain: &DomainName) -> Result<TokenizationRecord, LookupError> {
        Err(unreachable(domain))
    }
}

fn failing_analyzer() -> DomainAnalyzer {
    DomainAnalyzer::new(
        Box::new(Unreachable),
        Box::new(Unreachable),
        Box::new(Unreachable),
        Box::new(Unreachable),
        Engine::new(),
    )
}

/// Simulated chain and tokenization, failing network lookups.
fn simulated_analyzer() -> DomainAnalyzer {
    DomainAnalyzer::new(
        Box::new(Unreachable),
        Box::new(Unreachable),
        Box::new(SimulatedChainResolver),
        Box::new(SimulatedTokenization),
        Engine::new(),
    )
}

#[tokio::test]
async fn valuation_survives_every_provider_failing() -> anyhow::Result<()> {
    let analyzer: DomainAnalyzer = failing_analyzer();
    let cfg: Config = Config::default();

    let traditional: DomainReport = analyzer.analyze("app.com", &cfg).await?;
    assert_eq!(traditional.valuation.estimated_value, 522);
    assert!(traditional.dns.as_ref().and_then(|dns| dns.error.as_ref()).is_some());
    assert!(traditional.whois.as_ref().and_then(|whois| whois.error.as_ref()).is_some());
    assert!(traditional.tokenization.as_ref().and_then(|t| t.error.as_ref()).is_some());

    let chain: DomainReport = analyzer.analyze("myname.eth", &cfg).await?;
    assert_eq!(chain.valuation.estimated_value, 251);
    assert!(chain.chain.as_ref().and_then(|c| c.error.as_ref()).is_some());
    assert!(chain.dns.is_none());

    Ok(())
}

#[tokio::test]
async fn failed_dns_report_keeps_the_suffix() -> anyhow::Result<()> {
    let report: DomainReport = failing_analyzer()
        .analyze("cloudpay.net", &Config::default())
        .await?;

    let dns = report.dns.expect("dns section present");
    assert_eq!(dns.suffix, ".net");
    assert!(!dns.has_records);
    Ok(())
}

#[tokio::test]
async fn simulated_tokenization_feeds_reasoning() -> anyhow::Result<()> {
    let cfg = Config {
        no_dns: true,
        no_whois: true,
        ..Config::default()
    };
    let analyzer: DomainAnalyzer = simulated_analyzer();

    let tokenized: DomainReport = analyzer.analyze("app.com", &cfg).await?;
    let record = tokenized.tokenization.as_ref().expect("tokenization section");
    assert!(record.is_tokenized);
    assert!(tokenized.valuation.reasoning.contains("Tokenized on ethereum"));
    assert!(tokenized.valuation.reasoning.contains("DOMA Lending"));
    assert_eq!(tokenized.valuation.estimated_value, 522);

    let plain: DomainReport = analyzer.analyze("hello.com", &cfg).await?;
    assert!(!plain.tokenization.as_ref().is_some_and(|t| t.is_tokenized));
    assert!(!plain.valuation.reasoning.contains("Tokenized"));
    Ok(())
}

#[tokio::test]
async fn unsupported_blockchain_suffix_is_recorded() -> anyhow::Result<()> {
    let report: DomainReport = simulated_analyzer()
        .analyze("vault.blockchain", &Config::default())
        .await?;

    let chain = report.chain.expect("chain section");
    assert!(chain.error.is_some());
    assert!(report.valuation.estimated_value >= 10);
    Ok(())
}

#[tokio::test]
async fn report_json_has_documented_shape() -> anyhow::Result<()> {
    let report: DomainReport = simulated_analyzer()
        .analyze("  MyName.ETH ", &Config::default())
        .await?;
    let json: serde_json::Value = serde_json::to_value(&report)?;

    assert_eq!(json["domain"], "myname.eth");
    assert_eq!(json["valuation"]["currency"], "USD");
    assert_eq!(json["valuation"]["confidence"], "high");
    assert_eq!(json["chain"]["type"], "ENS");
    assert!(json["valuation"]["factors"].is_object());
    assert!(json.get("whois").is_none());
    Ok(())
}

#[tokio::test]
async fn offline_config_skips_providers() -> anyhow::Result<()> {
    let cfg = Config {
        offline: true,
        ..Config::default()
    };
    let report: DomainReport = failing_analyzer().analyze("webhub.io", &cfg).await?;

    assert!(report.tokenization.is_none());
    assert!(report.dns.is_none() && report.whois.is_none());
    assert_eq!(report.valuation.estimated_value, 279);
    Ok(())
}
