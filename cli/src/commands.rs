pub mod analyze;
pub mod appraise;

use std::net::SocketAddr;
use std::time::Duration;

use clap::{ArgAction, Parser};
use domval_common::config::{Config, DEFAULT_RESOLVER, OutputFormat};

#[derive(Parser)]
#[command(name = "domval")]
#[command(version)]
#[command(about = "Estimate the market value of domain names.")]
pub struct CommandLine {
    /// One or more domains to value
    #[arg(required = true, value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Output format (table or json)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Skip every lookup and only value the names
    #[arg(long)]
    pub offline: bool,

    /// Skip DNS record lookups
    #[arg(long)]
    pub no_dns: bool,

    /// Skip WHOIS lookups
    #[arg(long)]
    pub no_whois: bool,

    /// DNS resolver to query
    #[arg(long, value_name = "ADDR:PORT", default_value_t = DEFAULT_RESOLVER)]
    pub resolver: SocketAddr,

    /// Timeout for each lookup, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub timeout: u64,

    /// Print less; repeat to hide the factor trees as well
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            format: self.format,
            quiet: self.quiet,
            offline: self.offline,
            no_dns: self.no_dns,
            no_whois: self.no_whois,
            resolver: self.resolver,
            timeout: Duration::from_secs(self.timeout),
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
