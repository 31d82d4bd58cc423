use anyhow::Context;
use dns_parser::{Packet, ResponseCode};
use pnet::packet::dns::{DnsClass, DnsQuery, DnsType, DnsTypes, MutableDnsPacket, Opcode, Retcode};

use domval_common::records::RecordType;

pub const DNS_HDR_LEN: usize = 12;
pub const DNS_PORT: u16 = 53;
/// Longest label a QNAME length octet can describe.
pub const MAX_LABEL_LEN: usize = 63;

/// What a resolver answered for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub transaction_id: u16,
    /// NXDOMAIN: the name does not exist at all.
    pub name_error: bool,
    pub answer_count: usize,
}

impl DnsAnswer {
    pub fn has_records(&self) -> bool {
        !self.name_error && self.answer_count > 0
    }
}

pub fn create_query_packet(name: &str, record_type: RecordType, id: u16) -> anyhow::Result<Vec<u8>> {
    let query: DnsQuery = create_query(name, record_type)?;
    let q_fixed_len: usize = 4;
    let qlen: usize = query.qname.len() + q_fixed_len;
    let total: usize = DNS_HDR_LEN + qlen;
    let mut buffer: Vec<u8> = vec![0u8; total];

    {
        let mut dns: MutableDnsPacket =
            MutableDnsPacket::new(&mut buffer).context("creating dns header")?;
        dns.set_id(id);
        dns.set_is_response(0);
        dns.set_opcode(Opcode::StandardQuery);
        dns.set_is_authoriative(0);
        dns.set_is_truncated(0);
        dns.set_is_recursion_desirable(1);
        dns.set_is_recursion_available(0);
        dns.set_zero_reserved(0);
        dns.set_is_non_authenticated_data(0);
        dns.set_rcode(Retcode::NoError);
        dns.set_query_count(1);
        dns.set_response_count(0);
        dns.set_authority_rr_count(0);
        dns.set_additional_rr_count(0);
    }

    let mut cursor: usize = DNS_HDR_LEN;

    buffer[cursor..cursor + query.qname.len()].copy_from_slice(&query.qname);
    cursor += query.qname.len();

    let type_bytes: [u8; 2] = query.qtype.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&type_bytes);
    cursor += 2;

    let class_bytes: [u8; 2] = query.qclass.0.to_be_bytes();
    buffer[cursor..cursor + 2].copy_from_slice(&class_bytes);

    Ok(buffer)
}

pub fn parse_response(payload: &[u8]) -> anyhow::Result<DnsAnswer> {
    let packet = Packet::parse(payload).context("failed to parse DNS response")?;
    anyhow::ensure!(!packet.header.query, "DNS packet is a query, not a response");

    Ok(DnsAnswer {
        transaction_id: packet.header.id,
        name_error: packet.header.response_code == ResponseCode::NameError,
        answer_count: packet.answers.len(),
    })
}

fn create_query(name: &str, record_type: RecordType) -> anyhow::Result<DnsQuery> {
    Ok(DnsQuery {
        qname: encode_dns_name(name)?,
        qtype: to_dns_type(record_type),
        qclass: DnsClass(1),
        payload: Vec::new(),
    })
}

fn to_dns_type(record_type: RecordType) -> DnsType {
    match record_type {
        RecordType::A => DnsTypes::A,
        RecordType::Aaaa => DnsTypes::AAAA,
        RecordType::Mx => DnsTypes::MX,
        RecordType::Ns => DnsTypes::NS,
        RecordType::Txt => DnsTypes::TXT,
    }
}

fn encode_dns_name(name: &str) -> anyhow::Result<Vec<u8>> {
    let mut encoded: Vec<u8> = Vec::new();
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        anyhow::ensure!(
            label.len() <= MAX_LABEL_LEN,
            "DNS label is {} bytes, limit is {MAX_LABEL_LEN}",
            label.len()
        );
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    Ok(encoded)
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
    use pnet::packet::dns::DnsPacket;

    const QUESTION: [u8; 17] = [
        7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00,
        0x01,
    ];

    fn response(flags: [u8; 2], answers: u16) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![0x12, 0x34, flags[0], flags[1], 0, 1];
        bytes.extend_from_slice(&answers.to_be_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(&QUESTION);
        for _ in 0..answers {
            bytes.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
            bytes.extend_from_slice(&[0x00, 0x00, 0x0E, 0x10, 0x00, 0x04]);
            bytes.extend_from_slice(&[93, 184, 216, 34]);
        }
        bytes
    }

    #[test]
    fn encode_dns_name_skips_empty_labels() {
        assert_eq!(encode_dns_name("example.com.").unwrap(), QUESTION[..13].to_vec());
        assert_eq!(encode_dns_name("").unwrap(), vec![0]);
    }

    #[test]
    fn query_packet_rejects_oversized_labels() {
        let longest: String = "a".repeat(MAX_LABEL_LEN);
        assert!(create_query_packet(&format!("{longest}.com"), RecordType::A, 1).is_ok());

        let too_long: String = "a".repeat(MAX_LABEL_LEN + 1);
        assert!(create_query_packet(&format!("{too_long}.com"), RecordType::A, 1).is_err());

        let wraps: String = "b".repeat(256);
        assert!(create_query_packet(&format!("{wraps}.com"), RecordType::A, 1).is_err());
    }

    #[test]
    fn query_packet_carries_id_type_and_question() {
        let bytes = create_query_packet("example.com", RecordType::Mx, 0xBEEF).unwrap();
        assert_eq!(bytes.len(), DNS_HDR_LEN + 13 + 4);

        let dns = DnsPacket::new(&bytes).unwrap();
        assert_eq!(dns.get_id(), 0xBEEF);
        assert_eq!(dns.get_query_count(), 1);
        assert_eq!(dns.get_is_recursion_desirable(), 1);

        let tail = &bytes[bytes.len() - 4..];
        assert_eq!(tail, &[0x00, 0x0F, 0x00, 0x01]);
    }

    #[test]
    fn parse_response_counts_answers() {
        let answer = parse_response(&response([0x81, 0x80], 1)).unwrap();
        assert_eq!(answer.transaction_id, 0x1234);
        assert_eq!(answer.answer_count, 1);
        assert!(answer.has_records());
    }

    #[test]
    fn parse_response_flags_nxdomain() {
        let answer = parse_response(&response([0x81, 0x83], 0)).unwrap();
        assert!(answer.name_error);
        assert!(!answer.has_records());
    }

    #[test]
    fn parse_response_rejects_queries_and_garbage() {
        let query = create_query_packet("example.com", RecordType::A, 7).unwrap();
        assert!(parse_response(&query).is_err());
        assert!(parse_response(&[0x00, 0x01]).is_err());
    }
}
