use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, warn};

use domval_common::config::Config;
use domval_common::domain::DomainName;
use domval_common::error::LookupError;
use domval_common::providers::DnsLookup;
use domval_common::records::{DnsReport, RecordType};
use domval_protocols::dns::{self, DnsAnswer};

const MAX_DNS_PAYLOAD: usize = 4096;

/// Probes a name for A, AAAA, MX, NS and TXT records over UDP.
pub struct DnsChecker {
    resolver: SocketAddr,
    timeout: Duration,
}

impl DnsChecker {
    pub fn new(resolver: SocketAddr, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.resolver, cfg.timeout)
    }
}

#[async_trait]
impl DnsLookup for DnsChecker {
    async fn check(&self, domain: &DomainName) -> Result<DnsReport, LookupError> {
        let mut report = DnsReport::new(domain.suffix().unwrap_or_default());
        let mut queries: JoinSet<(RecordType, Result<DnsAnswer, LookupError>)> = JoinSet::new();

        for record_type in RecordType::PROBED {
            let name: String = domain.to_string();
            let (resolver, limit) = (self.resolver, self.timeout);
            queries.spawn(async move {
                let answer = query(resolver, limit, &name, record_type).await;
                (record_type, answer)
            });
        }

        let mut answered: bool = false;
        let mut last_error: Option<LookupError> = None;

        while let Some(joined) = queries.join_next().await {
            let Ok((record_type, result)) = joined else {
                continue;
            };
            match result {
                Ok(answer) => {
                    answered = true;
                    if answer.has_records() {
                        report.add_record_type(record_type);
                    }
                }
                Err(e) => {
                    debug!("{record_type} query for {domain} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        if !answered {
            let error = last_error.unwrap_or_else(|| {
                LookupError::Protocol("no DNS query completed".to_string())
            });
            warn!("DNS lookup for {domain} failed: {error}");
            return Err(error);
        }

        report.record_types.sort();
        report.available = !report.has_records;
        Ok(report)
    }
}

async fn query(
    resolver: SocketAddr,
    limit: Duration,
    name: &str,
    record_type: RecordType,
) -> Result<DnsAnswer, LookupError> {
    timeout(limit, exchange(resolver, name, record_type))
        .await
        .map_err(|_elapsed| LookupError::Timeout {
            service: "DNS",
            after: limit,
        })?
}

async fn exchange(
    resolver: SocketAddr,
    name: &str,
    record_type: RecordType,
) -> Result<DnsAnswer, LookupError> {
    let socket: UdpSocket = UdpSocket::bind(unspecified_for(&resolver)).await?;
    socket.connect(resolver).await?;

    let id: u16 = rand::random();
    let packet: Vec<u8> = dns::create_query_packet(name, record_type, id)
        .map_err(|e| LookupError::Protocol(format!("{e:#}")))?;
    socket.send(&packet).await?;

    let mut buffer = [0u8; MAX_DNS_PAYLOAD];
    loop {
        let len: usize = socket.recv(&mut buffer).await?;
        let answer: DnsAnswer = match dns::parse_response(&buffer[..len]) {
            Ok(answer) => answer,
            Err(e) => {
                debug!("dropping unparseable DNS datagram from {resolver}: {e:#}");
                continue;
            }
        };

        // Stray replies for earlier transactions are dropped.
        if answer.transaction_id == id {
            return Ok(answer);
        }
    }
}

fn unspecified_for(resolver: &SocketAddr) -> SocketAddr {
    let ip: IpAddr = match resolver {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };
    SocketAddr::new(ip, 0)
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
    use std::str::FromStr;

    const A_TYPE: [u8; 2] = [0x00, 0x01];

    /// Answers A questions with one address and everything else with an empty
    /// NOERROR response.
    async fn spawn_fake_resolver() -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let request = &buf[..len];
                let qtype = &request[len - 4..len - 2];
                let answers: u16 = if qtype == A_TYPE { 1 } else { 0 };

                let mut reply: Vec<u8> = vec![request[0], request[1], 0x81, 0x80, 0, 1];
                reply.extend_from_slice(&answers.to_be_bytes());
                reply.extend_from_slice(&[0, 0, 0, 0]);
                reply.extend_from_slice(&request[12..]);
                if answers == 1 {
                    reply.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
                    reply.extend_from_slice(&[0x00, 0x00, 0x0E, 0x10, 0x00, 0x04]);
                    reply.extend_from_slice(&[127, 0, 0, 1]);
                }
                let _ = socket.send_to(&reply, peer).await;
            }
        });

        addr
    }

    #[tokio::test]
    async fn check_reports_answered_record_types() {
        let resolver = spawn_fake_resolver().await;
        let checker = DnsChecker::new(resolver, Duration::from_secs(2));
        let domain = DomainName::from_str("example.com").unwrap();

        let report = checker.check(&domain).await.unwrap();

        assert_eq!(report.suffix, ".com");
        assert!(report.has_records);
        assert!(!report.available);
        assert_eq!(report.record_types, vec![RecordType::A]);
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn exchange_skips_garbage_before_the_reply() {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let resolver = socket.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                return;
            };
            let _ = socket.send_to(&[0xFF, 0x00, 0x13], peer).await;

            let mut reply: Vec<u8> = vec![buf[0], buf[1], 0x81, 0x80, 0, 1, 0, 0, 0, 0, 0, 0];
            reply.extend_from_slice(&buf[12..len]);
            let _ = socket.send_to(&reply, peer).await;
        });

        let answer = query(resolver, Duration::from_secs(2), "example.com", RecordType::Ns)
            .await
            .unwrap();

        assert_eq!(answer.answer_count, 0);
        assert!(!answer.name_error);
    }

    #[tokio::test]
    async fn check_fails_when_resolver_is_silent() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let checker = DnsChecker::new(silent.local_addr().unwrap(), Duration::from_millis(100));
        let domain = DomainName::from_str("example.com").unwrap();

        let result = checker.check(&domain).await;

        assert!(matches!(result, Err(LookupError::Timeout { service: "DNS", .. })));
    }

    #[test]
    fn unspecified_matches_resolver_family() {
        let v4: SocketAddr = "1.1.1.1:53".parse().unwrap();
        let v6: SocketAddr = "[2606:4700::1111]:53".parse().unwrap();
        assert!(unspecified_for(&v4).is_ipv4());
        assert!(unspecified_for(&v6).is_ipv6());
    }
}
