//! # List File Loading
//!
//! Both list formats are line-oriented: blank lines and `#` comments are
//! skipped, the first whitespace-separated field is the value and the rest of
//! the line is optional metadata.
//!
//! * Servers: `<ip> [label...]`
//! * Domains: `<domain> [category]`

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::net::IpAddr;
use std::path::Path;

use anyhow::Context;
use dnscheck_common::models::{Category, DomainEntry, Server};
use dnscheck_common::warn;

pub fn load_servers(path: &Path) -> anyhow::Result<Vec<Server>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_servers(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

pub fn load_domains(path: &Path) -> anyhow::Result<Vec<DomainEntry>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_domains(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

pub fn parse_servers<R: BufRead>(reader: R) -> io::Result<Vec<Server>> {
    let mut servers: Vec<Server> = Vec::new();

    for line in reader.lines() {
        let line: String = line?;
        let Some((address, rest)) = split_entry(&line) else {
            continue;
        };

        if address.parse::<IpAddr>().is_err() {
            warn!("Invalid IP address '{address}', skipping");
            continue;
        }

        let server = Server::new(address);
        if rest.is_empty() {
            servers.push(server);
        } else {
            servers.push(server.with_label(rest.join(" ")));
        }
    }

    Ok(servers)
}

pub fn parse_domains<R: BufRead>(reader: R) -> io::Result<Vec<DomainEntry>> {
    let mut domains: Vec<DomainEntry> = Vec::new();

    for line in reader.lines() {
        let line: String = line?;
        let Some((domain, rest)) = split_entry(&line) else {
            continue;
        };

        let category: Category = rest
            .first()
            .map(|label| Category::from_label(label))
            .unwrap_or(Category::Other);
        domains.push(DomainEntry::new(domain, category));
    }

    Ok(domains)
}

fn split_entry(line: &str) -> Option<(&str, Vec<&str>)> {
    let line: &str = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.split_whitespace();
    let first: &str = fields.next()?;
    Some((first, fields.collect()))
}
