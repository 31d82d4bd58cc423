//! WHOIS (RFC 3912) query framing and response parsing.
//!
//! Responses are free-form `key: value` text whose keys differ per registry;
//! only the handful of fields the report shows are extracted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

use domval_common::records::WhoisReport;

pub const WHOIS_PORT: u16 = 43;

const WHOIS_SERVERS: &[(&str, &str)] = &[
    (".com", "whois.verisign-grs.com"),
    (".net", "whois.verisign-grs.com"),
    (".org", "whois.pir.org"),
    (".info", "whois.afilias.net"),
    (".biz", "whois.neulevel.biz"),
    (".name", "whois.nic.name"),
    (".io", "whois.nic.io"),
    (".co", "whois.nic.co"),
    (".me", "whois.nic.me"),
    (".tv", "whois.nic.tv"),
    (".cc", "ccwhois.verisign-grs.com"),
    (".ws", "whois.website.ws"),
];

const AVAILABLE_MARKERS: &[&str] = &["no match", "not found", "no data found"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%Y/%m/%d"];

/// Registry WHOIS host for a suffix such as `.com`.
pub fn server_for(suffix: &str) -> Option<&'static str> {
    WHOIS_SERVERS
        .iter()
        .find(|(known, _)| *known == suffix)
        .map(|(_, server)| *server)
}

pub fn format_query(domain: &str) -> Vec<u8> {
    format!("{domain}\r\n").into_bytes()
}

/// Fills a [`WhoisReport`] from the raw text a registry returned.
pub fn parse_response(raw: &str, report: &mut WhoisReport) {
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if AVAILABLE_MARKERS.iter().any(|marker| lower.contains(marker)) {
            report.available = true;
            return;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        match key.as_str() {
            "registrar" => report.registrar = Some(value.to_string()),
            "creation date" | "created" | "registration time" => {
                if let Some(date) = parse_date(value) {
                    report.registration_date = Some(date);
                }
            }
            "expiry date" | "expires" | "expiration time" | "registry expiry date" => {
                if let Some(date) = parse_date(value) {
                    report.expiry_date = Some(date);
                }
            }
            "updated date" | "last modified" | "last updated" => {
                if let Some(date) = parse_date(value) {
                    report.updated_date = Some(date);
                }
            }
            "name server" => report.name_servers.push(value.to_string()),
            "status" | "domain status" => report.status.push(value.to_string()),
            _ => {}
        }
    }

    if report.has_registration() {
        report.available = false;
    }
}

pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc());

    if parsed.is_none() {
        trace!("unrecognised WHOIS date: {value:?}");
    }
    parsed
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
