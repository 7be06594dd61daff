//! A tiny DNS responder on the loopback interface.

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use pnet::packet::dns::MutableDnsPacket;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

const TYPE_A: u16 = 1;
const TYPE_CNAME: u16 = 5;
const CLASS_IN: u16 = 1;
const TTL: u32 = 300;

/// How the responder treats a given query name.
#[derive(Debug, Clone)]
pub enum Answer {
    Address(Ipv4Addr),
    /// Response with an empty answer section.
    Nothing,
    /// Never replies.
    Silent,
    /// Sends a reply with the wrong transaction id first, then the address.
    StrayThen(Ipv4Addr),
    /// A CNAME back to the question name followed by the address.
    Aliased(Ipv4Addr),
    /// Claims one answer but carries none.
    Garbled,
}

pub struct Responder {
    pub port: u16,
    handle: JoinHandle<()>,
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Starts answering on `127.0.0.1` on an ephemeral port. Unknown names are silent.
pub async fn spawn_responder(answers: HashMap<String, Answer>) -> anyhow::Result<Responder> {
    let socket: UdpSocket = UdpSocket::bind("127.0.0.1:0")
        .await
        .context("binding loopback responder")?;
    let port: u16 = socket.local_addr()?.port();
    let socket = Arc::new(socket);
    let answers = Arc::new(answers);

    let handle = tokio::spawn(async move {
        let mut buffer = [0u8; 512];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buffer).await else {
                return;
            };
            let query: Vec<u8> = buffer[..len].to_vec();
            let Some(name) = query_name(&query) else {
                continue;
            };
            let answer = answers.get(&name).cloned().unwrap_or(Answer::Silent);
            let _ = reply(&socket, peer, &query, answer).await;
        }
    });

    Ok(Responder { port, handle })
}

async fn reply(
    socket: &UdpSocket,
    peer: SocketAddr,
    query: &[u8],
    answer: Answer,
) -> std::io::Result<()> {
    let packet: Vec<u8> = match answer {
        Answer::Address(addr) => response(query, &[(TYPE_A, &addr.octets())]),
        Answer::Nothing => response(query, &[]),
        Answer::Silent => return Ok(()),
        Answer::StrayThen(addr) => {
            let mut stray: Vec<u8> = response(query, &[(TYPE_A, &[6, 6, 6, 6])]);
            let id: u16 = u16::from_be_bytes([stray[0], stray[1]]).wrapping_add(1);
            stray[..2].copy_from_slice(&id.to_be_bytes());
            socket.send_to(&stray, peer).await?;
            response(query, &[(TYPE_A, &addr.octets())])
        }
        Answer::Aliased(addr) => {
            let alias: &[u8] = &[0xC0, 0x0C];
            response(query, &[(TYPE_CNAME, alias), (TYPE_A, &addr.octets())])
        }
        Answer::Garbled => {
            let mut packet: Vec<u8> = response(query, &[]);
            packet[6..8].copy_from_slice(&1u16.to_be_bytes());
            packet
        }
    };
    socket.send_to(&packet, peer).await?;
    Ok(())
}

/// Echoes the query back as a response carrying `records` as `(type, rdata)`
/// pairs, each owned by the question name.
pub fn response(query: &[u8], records: &[(u16, &[u8])]) -> Vec<u8> {
    let mut packet: Vec<u8> = query.to_vec();
    if let Some(mut dns) = MutableDnsPacket::new(&mut packet) {
        dns.set_is_response(1);
        dns.set_response_count(records.len() as u16);
    }
    for (rtype, rdata) in records {
        packet.extend_from_slice(&[0xC0, 0x0C]);
        packet.extend_from_slice(&rtype.to_be_bytes());
        packet.extend_from_slice(&CLASS_IN.to_be_bytes());
        packet.extend_from_slice(&TTL.to_be_bytes());
        packet.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        packet.extend_from_slice(rdata);
    }
    packet
}

/// Decodes the first question name, without compression support.
fn query_name(query: &[u8]) -> Option<String> {
    let mut labels: Vec<String> = Vec::new();
    let mut cursor: usize = 12;
    loop {
        let len: usize = *query.get(cursor)? as usize;
        cursor += 1;
        if len == 0 {
            break;
        }
        let label = query.get(cursor..cursor + len)?;
        labels.push(String::from_utf8_lossy(label).into_owned());
        cursor += len;
    }
    Some(labels.join("."))
}
