use std::iter::FusedIterator;
use std::sync::Arc;

use dnscheck_common::models::{DomainEntry, Server};

/// One server paired with one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeJob {
    pub server: Server,
    pub domain: DomainEntry,
}

/// Lazy cross product of servers and domains.
///
/// Servers form the outer loop and domains the inner one, both in input order.
/// The order only decides dispatch, not completion.
#[derive(Debug, Clone)]
pub struct JobGenerator {
    servers: Arc<[Server]>,
    domains: Arc<[DomainEntry]>,
    server_idx: usize,
    domain_idx: usize,
}

impl JobGenerator {
    pub fn new(servers: Arc<[Server]>, domains: Arc<[DomainEntry]>) -> Self {
        Self {
            servers,
            domains,
            server_idx: 0,
            domain_idx: 0,
        }
    }

    /// Number of jobs the generator yields from a fresh start.
    pub fn total(&self) -> usize {
        self.servers.len() * self.domains.len()
    }

    fn remaining(&self) -> usize {
        if self.domains.is_empty() || self.server_idx >= self.servers.len() {
            return 0;
        }
        (self.servers.len() - self.server_idx) * self.domains.len() - self.domain_idx
    }
}

impl Iterator for JobGenerator {
    type Item = ProbeJob;

    fn next(&mut self) -> Option<ProbeJob> {
        if self.remaining() == 0 {
            return None;
        }

        let job = ProbeJob {
            server: self.servers[self.server_idx].clone(),
            domain: self.domains[self.domain_idx].clone(),
        };

        self.domain_idx += 1;
        if self.domain_idx == self.domains.len() {
            self.domain_idx = 0;
            self.server_idx += 1;
        }

        Some(job)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for JobGenerator {}

impl FusedIterator for JobGenerator {}
