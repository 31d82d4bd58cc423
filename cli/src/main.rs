mod commands;
mod terminal;

use std::str::FromStr;

use anyhow::Context;
use commands::{CommandLine, analyze, appraise};
use domval_common::config::{Config, OutputFormat};
use domval_common::domain::DomainName;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg: Config = commands.to_config();
    let domains: Vec<DomainName> = commands
        .domains
        .iter()
        .map(|raw| DomainName::from_str(raw).with_context(|| format!("invalid domain {raw:?}")))
        .collect::<anyhow::Result<_>>()?;

    if cfg.format == OutputFormat::Table {
        print::banner(cfg.quiet);
    }

    match cfg.offline {
        true => appraise::appraise(&domains, &cfg),
        false => analyze::analyze(&domains, &cfg).await,
    }
}
