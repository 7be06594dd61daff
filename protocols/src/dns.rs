use std::net::Ipv4Addr;

use pnet::packet::dns::{
    DnsClass, DnsPacket, DnsQuery, DnsTypes, MutableDnsPacket, Opcode, Retcode,
};
use thiserror::Error;

pub const DNS_HDR_LEN: usize = 12;
pub const DNS_PORT: u16 = 53;

const QUESTION_FIXED_LEN: usize = 4;
const RR_FIXED_LEN: usize = 10;
const COMPRESSION_MASK: u8 = 0xC0;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("invalid domain name '{0}'")]
    InvalidName(String),
    #[error("truncated or invalid DNS packet")]
    Truncated,
    #[error("packet is not a response")]
    NotAResponse,
    #[error("transaction id mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: u16, actual: u16 },
    #[error("no answer received")]
    EmptyAnswer,
    #[error("no A record found in response")]
    NoARecord,
}

/// Builds a recursive `A`/`IN` query for `domain`.
pub fn create_a_query(domain: &str, id: u16) -> Result<Vec<u8>, DnsError> {
    let query: DnsQuery = DnsQuery {
        qname: encode_dns_name(domain)?,
        qtype: DnsTypes::A,
        qclass: DnsClass(1),
        payload: Vec::new(),
    };
    let total: usize = DNS_HDR_LEN + query.qname.len() + QUESTION_FIXED_LEN;
    let mut buffer: Vec<u8> = vec![0u8; total];

    {
        let mut dns: MutableDnsPacket =
            MutableDnsPacket::new(&mut buffer).ok_or(DnsError::Truncated)?;
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

    buffer[cursor..cursor + 2].copy_from_slice(&query.qtype.0.to_be_bytes());
    cursor += 2;

    buffer[cursor..cursor + 2].copy_from_slice(&query.qclass.0.to_be_bytes());

    Ok(buffer)
}

/// Reads the transaction id without parsing the rest of the packet.
pub fn get_transaction_id(payload: &[u8]) -> Option<u16> {
    if payload.len() < DNS_HDR_LEN {
        return None;
    }
    Some(u16::from_be_bytes([payload[0], payload[1]]))
}

/// Extracts the first `A` record from the answer section of a response to `id`.
///
/// The answer section is walked record by record since pnet only decodes the
/// first resource record. A header that promises more than the packet holds is
/// reported as [`DnsError::Truncated`].
pub fn get_a_record(payload: &[u8], id: u16) -> Result<Ipv4Addr, DnsError> {
    let dns = DnsPacket::new(payload).ok_or(DnsError::Truncated)?;

    if dns.get_id() != id {
        return Err(DnsError::IdMismatch {
            expected: id,
            actual: dns.get_id(),
        });
    }
    if dns.get_is_response() == 0 {
        return Err(DnsError::NotAResponse);
    }

    let mut cursor: usize = DNS_HDR_LEN;
    for _ in 0..dns.get_query_count() {
        cursor = skip_name(payload, cursor)?;
        cursor = checked_advance(payload, cursor, QUESTION_FIXED_LEN)?;
    }

    let answers: u16 = dns.get_response_count();
    if answers == 0 {
        return Err(DnsError::EmptyAnswer);
    }

    let mut found: Option<Ipv4Addr> = None;
    for _ in 0..answers {
        cursor = skip_name(payload, cursor)?;
        let fixed: &[u8] = payload
            .get(cursor..cursor + RR_FIXED_LEN)
            .ok_or(DnsError::Truncated)?;
        let rtype: u16 = u16::from_be_bytes([fixed[0], fixed[1]]);
        let rdlength: usize = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        cursor += RR_FIXED_LEN;

        let rdata: &[u8] = payload
            .get(cursor..cursor + rdlength)
            .ok_or(DnsError::Truncated)?;
        cursor += rdlength;

        if rtype == DnsTypes::A.0 && found.is_none() {
            let octets: [u8; 4] = rdata.try_into().map_err(|_| DnsError::Truncated)?;
            found = Some(Ipv4Addr::from(octets));
        }
    }

    found.ok_or(DnsError::NoARecord)
}

/// Returns the offset just past the (possibly compressed) name at `cursor`.
fn skip_name(payload: &[u8], mut cursor: usize) -> Result<usize, DnsError> {
    loop {
        let len: u8 = *payload.get(cursor).ok_or(DnsError::Truncated)?;
        match len & COMPRESSION_MASK {
            0 if len == 0 => return Ok(cursor + 1),
            0 => cursor = checked_advance(payload, cursor + 1, len as usize)?,
            COMPRESSION_MASK => return checked_advance(payload, cursor, 2),
            _ => return Err(DnsError::Truncated),
        }
    }
}

fn checked_advance(payload: &[u8], cursor: usize, len: usize) -> Result<usize, DnsError> {
    let next: usize = cursor + len;
    if next > payload.len() {
        return Err(DnsError::Truncated);
    }
    Ok(next)
}

fn encode_dns_name(name: &str) -> Result<Vec<u8>, DnsError> {
    let trimmed: &str = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() || trimmed.len() > MAX_NAME_LEN {
        return Err(DnsError::InvalidName(name.to_string()));
    }

    let mut encoded: Vec<u8> = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(DnsError::InvalidName(name.to_string()));
        }
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    Ok(encoded)
}
