use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RESOLVER: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 53);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How a finished report is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("unsupported format: {s} (expected 'table' or 'json')")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub format: OutputFormat,
    /// 0 prints everything, 1 hides section headers, 2 also hides factor trees.
    pub quiet: u8,
    /// Skips every network lookup; only the valuation runs.
    pub offline: bool,
    /// Disables DNS record lookups.
    pub no_dns: bool,
    /// Disables WHOIS queries.
    pub no_whois: bool,
    pub resolver: SocketAddr,
    /// Upper bound for any single lookup.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            quiet: 0,
            offline: false,
            no_dns: false,
            no_whois: false,
            resolver: DEFAULT_RESOLVER,
            timeout: DEFAULT_TIMEOUT,
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_accepts_both_names_case_insensitively() {
        assert_eq!(OutputFormat::from_str("table"), Ok(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn default_config_uses_public_resolver() {
        let cfg = Config::default();
        assert_eq!(cfg.resolver.port(), 53);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.format, OutputFormat::Table);
        assert!(!cfg.offline);
    }
}
