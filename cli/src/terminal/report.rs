use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::*;

use crate::mprint;
use crate::terminal::{colors, print};
use domval_common::config::{Config, OutputFormat};
use domval_common::records::{ChainReport, DnsReport, TokenizationRecord, WhoisReport};
use domval_common::success;
use domval_core::{Confidence, DomainReport, ValuationResult};

type Detail = (String, ColoredString);

const VALUATION_KEYS: &[&str] = &["Estimated value", "Confidence", "Reasoning"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes finished reports to stdout in the configured format.
pub fn emit(reports: &[DomainReport], total_time: Duration, cfg: &Config) -> anyhow::Result<()> {
    match cfg.format {
        OutputFormat::Json => emit_json(reports),
        OutputFormat::Table => {
            emit_table(reports, total_time, cfg);
            Ok(())
        }
    }
}

fn emit_json(reports: &[DomainReport]) -> anyhow::Result<()> {
    let json: String = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    print::print(&json);
    Ok(())
}

fn emit_table(reports: &[DomainReport], total_time: Duration, cfg: &Config) {
    for (idx, report) in reports.iter().enumerate() {
        print_report(report, cfg);
        if idx + 1 != reports.len() {
            mprint!();
        }
    }
    print_summary(reports.len(), total_time, cfg);
}

fn print_report(report: &DomainReport, cfg: &Config) {
    print::header(report.domain.as_str(), cfg.quiet);
    print_valuation(&report.valuation);

    if cfg.quiet >= 2 {
        return;
    }

    let mut sections: Vec<(&str, Vec<Detail>)> = vec![("Factors", factor_details(&report.valuation))];
    if let Some(dns) = &report.dns {
        sections.push(("DNS", dns_details(dns)));
    }
    if let Some(whois) = &report.whois {
        sections.push(("WHOIS", whois_details(whois)));
    }
    if let Some(chain) = &report.chain {
        sections.push(("Blockchain", chain_details(chain)));
    }
    if let Some(tokenization) = &report.tokenization {
        sections.push(("Tokenization", tokenization_details(tokenization)));
    }

    for (idx, (name, details)) in sections.into_iter().enumerate() {
        print::tree_head(idx, name);
        print::as_tree_one_level(details);
    }
}

fn print_valuation(valuation: &ValuationResult) {
    print::set_key_width(VALUATION_KEYS);
    let value: ColoredString = format!(
        "${} {}",
        group_thousands(valuation.estimated_value),
        valuation.currency
    )
    .color(colors::VALUE)
    .bold();

    print::aligned_line("Estimated value", value);
    print::aligned_line("Confidence", confidence_colored(valuation.confidence));
    print::aligned_line("Reasoning", valuation.reasoning.as_str());
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let domains: ColoredString = match count {
        1 => "1 domain".to_string(),
        n => format!("{n} domains"),
    }
    .bold()
    .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Analysis Complete: {domains} valued in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
            print::fat_separator();
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}

fn confidence_colored(confidence: Confidence) -> ColoredString {
    let text: &str = confidence.as_str();
    match confidence {
        Confidence::High => text.green().bold(),
        Confidence::Medium => text.yellow(),
        Confidence::Low => text.red(),
    }
}

fn factor_details(valuation: &ValuationResult) -> Vec<Detail> {
    let factors = &valuation.factors;
    vec![
        detail("Length", factors.length.to_string().normal()),
        detail("Length score", score(factors.length_score)),
        detail("Characters", score(factors.character_score)),
        detail("Words", score(factors.word_score)),
        detail("Suffix", score(factors.suffix_score)),
        detail("Pronounceable", yes_no(factors.pronounceable)),
        detail("Brandable", yes_no(factors.brandable)),
    ]
}

fn dns_details(dns: &DnsReport) -> Vec<Detail> {
    if let Some(error) = &dns.error {
        return vec![failure(error)];
    }

    let records: String = match dns.record_types.is_empty() {
        true => "none".to_string(),
        false => dns
            .record_types
            .iter()
            .map(|record| record.as_str())
            .collect::<Vec<&str>>()
            .join(", "),
    };

    vec![
        detail("Status", availability(dns.available)),
        detail("Records", records.normal()),
    ]
}

fn whois_details(whois: &WhoisReport) -> Vec<Detail> {
    if let Some(error) = &whois.error {
        return vec![failure(error)];
    }

    let mut details: Vec<Detail> = vec![detail("Status", availability(whois.available))];
    if let Some(registrar) = &whois.registrar {
        details.push(detail("Registrar", registrar.normal()));
    }
    for (key, date) in [
        ("Registered", whois.registration_date),
        ("Expires", whois.expiry_date),
        ("Updated", whois.updated_date),
    ] {
        if let Some(date) = date {
            details.push(detail(key, format_date(date)));
        }
    }
    if !whois.name_servers.is_empty() {
        details.push(detail("Name servers", whois.name_servers.join(", ").normal()));
    }
    details
}

fn chain_details(chain: &ChainReport) -> Vec<Detail> {
    if let Some(error) = &chain.error {
        return vec![failure(error)];
    }

    let mut details: Vec<Detail> = vec![detail("Status", availability(chain.available))];
    if let Some(kind) = chain.kind {
        details.push(detail("Service", kind.to_string().normal()));
    }
    if let Some(owner) = &chain.owner {
        details.push(detail("Owner", owner.normal()));
    }
    if let Some(expiry) = chain.expiry_date {
        details.push(detail("Expires", format_date(expiry)));
    }
    if !chain.records.is_empty() {
        let records: String = chain.records.keys().cloned().collect::<Vec<String>>().join(", ");
        details.push(detail("Records", records.normal()));
    }
    details
}

fn tokenization_details(record: &TokenizationRecord) -> Vec<Detail> {
    if let Some(error) = &record.error {
        return vec![failure(error)];
    }

    let mut details: Vec<Detail> = vec![
        detail("Tokenized", yes_no(record.is_tokenized)),
        detail("Eligibility", record.eligibility.note.as_str().normal()),
    ];
    if let Some(chain) = &record.chain {
        details.push(detail("Chain", chain.normal()));
    }
    if let Some(rights) = &record.token_rights {
        details.push(detail(
            "Rights",
            format!("{} total, {} available, {} locked", rights.total, rights.available, rights.locked).normal(),
        ));
    }
    if let Some(defi) = record.defi.as_ref().filter(|defi| defi.is_collateral) {
        let platform: &str = defi.lending_platform.as_deref().unwrap_or("unknown platform");
        details.push(detail("Collateral", platform.normal()));
    }
    if !record.cross_chain.is_empty() {
        let chains: String = record.cross_chain.keys().cloned().collect::<Vec<String>>().join(", ");
        details.push(detail("Bridged to", chains.normal()));
    }
    details
}

fn detail(key: &str, value: ColoredString) -> Detail {
    (key.to_string(), value)
}

fn failure(error: &str) -> Detail {
    detail("Error", error.color(colors::FAILED))
}

fn availability(available: bool) -> ColoredString {
    match available {
        true => "available".color(colors::AVAILABLE).bold(),
        false => "taken".color(colors::TAKEN),
    }
}

fn yes_no(flag: bool) -> ColoredString {
    match flag {
        true => "yes".green(),
        false => "no".bright_black(),
    }
}

fn score(value: f64) -> ColoredString {
    format!("{value:.2}").color(colors::VALUE)
}

fn format_date(date: DateTime<Utc>) -> ColoredString {
    date.format(DATE_FORMAT).to_string().normal()
}

fn group_thousands(value: u64) -> String {
    let digits: String = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(10), "10");
        assert_eq!(group_thousands(522), "522");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn failed_dns_collapses_to_error_line() {
        let details = dns_details(&DnsReport::failed(".com", "DNS lookup timed out after 5s"));
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].0, "Error");
    }

    #[test]
    fn factor_tree_lists_every_score() {
        let valuation = domval_core::Engine::new().evaluate("app.com");
        let keys: Vec<String> = factor_details(&valuation).into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.contains(&"Suffix".to_string()));
    }
}
