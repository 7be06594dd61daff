use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dnscheck_common::error::ProbeError;
use dnscheck_common::models::{ProbeOutcome, Server};
use dnscheck_protocols::dns::{self, DnsError};
use tokio::net::UdpSocket;
use tracing::trace;

use super::Prober;

const RECV_BUFFER_SIZE: usize = 4096;

/// Sends a single `A` query over UDP and waits for the matching answer.
#[derive(Debug, Clone)]
pub struct UdpProber {
    port: u16,
}

impl Default for UdpProber {
    fn default() -> Self {
        Self {
            port: dns::DNS_PORT,
        }
    }
}

impl UdpProber {
    /// Targets `port` instead of 53.
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }

    async fn query(&self, server: &Server, domain: &str) -> Result<IpAddr, ProbeError> {
        let addr: IpAddr = server
            .address
            .parse()
            .map_err(|_| ProbeError::InvalidServer(server.address.clone()))?;
        let target: SocketAddr = SocketAddr::new(addr, self.port);

        let id: u16 = rand::random();
        let query: Vec<u8> =
            dns::create_a_query(domain, id).map_err(|e| ProbeError::InvalidQuery(e.to_string()))?;

        let socket: UdpSocket = UdpSocket::bind(unspecified_for(&addr)).await?;
        socket.connect(target).await?;
        socket.send(&query).await?;

        let mut buffer = [0u8; RECV_BUFFER_SIZE];
        loop {
            let len: usize = socket.recv(&mut buffer).await?;
            let datagram: &[u8] = &buffer[..len];
            match dns::get_transaction_id(datagram) {
                Some(actual) if actual == id => {
                    return dns::get_a_record(datagram, id)
                        .map(IpAddr::V4)
                        .map_err(into_probe_error);
                }
                Some(actual) => trace!("{target}: dropping stray response with id {actual}"),
                None => trace!("{target}: dropping {len} byte datagram"),
            }
        }
    }
}

#[async_trait]
impl Prober for UdpProber {
    async fn probe(&self, server: &Server, domain: &str, timeout: Duration) -> ProbeOutcome {
        let start: Instant = Instant::now();
        let answer = match tokio::time::timeout(timeout, self.query(server, domain)).await {
            Ok(answer) => answer,
            Err(_elapsed) => Err(ProbeError::Timeout(timeout)),
        };
        ProbeOutcome {
            latency: start.elapsed(),
            answer,
        }
    }
}

fn unspecified_for(addr: &IpAddr) -> SocketAddr {
    match addr {
        IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}

fn into_probe_error(err: DnsError) -> ProbeError {
    match err {
        DnsError::EmptyAnswer => ProbeError::EmptyAnswer,
        DnsError::NoARecord => ProbeError::NoARecord,
        other => ProbeError::Malformed(other.to_string()),
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
