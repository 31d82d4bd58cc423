use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use domval_common::config::Config;
use domval_common::domain::DomainName;
use domval_common::error::LookupError;
use domval_common::providers::WhoisLookup;
use domval_common::records::WhoisReport;
use domval_protocols::whois::{self, WHOIS_PORT};

/// Queries the registry WHOIS server for the domain's suffix.
pub struct WhoisClient {
    timeout: Duration,
    /// Sends every query here instead of the per-suffix registry server.
    pinned: Option<SocketAddr>,
}

impl WhoisClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            pinned: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.timeout)
    }

    pub fn pinned(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            timeout,
            pinned: Some(server),
        }
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &DomainName) -> Result<WhoisReport, LookupError> {
        let raw: String = match self.pinned {
            Some(server) => self.fetch(server, domain).await?,
            None => {
                let suffix: &str = domain.suffix().unwrap_or_default();
                let host: &str = whois::server_for(suffix)
                    .ok_or_else(|| LookupError::NoWhoisServer(domain.to_string()))?;
                self.fetch((host, WHOIS_PORT), domain).await?
            }
        };

        let mut report = WhoisReport::new();
        whois::parse_response(&raw, &mut report);
        report.raw = Some(raw);
        Ok(report)
    }
}

impl WhoisClient {
    async fn fetch<A>(&self, server: A, domain: &DomainName) -> Result<String, LookupError>
    where
        A: tokio::net::ToSocketAddrs + Send,
    {
        timeout(self.timeout, query_server(server, domain.as_str()))
            .await
            .map_err(|_elapsed| LookupError::Timeout {
                service: "WHOIS",
                after: self.timeout,
            })?
    }
}

async fn query_server<A>(server: A, domain: &str) -> Result<String, LookupError>
where
    A: tokio::net::ToSocketAddrs,
{
    let mut stream: TcpStream = TcpStream::connect(server).await?;
    stream.write_all(&whois::format_query(domain)).await?;

    let mut bytes: Vec<u8> = Vec::new();
    stream.read_to_end(&mut bytes).await?;
    debug!("received {} bytes of WHOIS data for {domain}", bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
