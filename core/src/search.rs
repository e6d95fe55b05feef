//! Predicate searches over the alive hosts of a report.
//!
//! The port-driven searches ([`with_open_port`], [`with_service`],
//! [`with_banner`]) emit a host once per matching open port, so a host with
//! two matching ports appears twice. Pass the result through [`unique`] for a
//! plain "matching hosts" list.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use nwa_common::report::{Host, Port, ScanReport};

use crate::query::{alive, open_ports, os_guess};

/// Which field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Os,
    Service,
    Banner,
    Port,
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "os" => Ok(SearchKind::Os),
            "service" => Ok(SearchKind::Service),
            "banner" => Ok(SearchKind::Banner),
            "port" => Ok(SearchKind::Port),
            _ => Err(format!(
                "invalid search kind: {s} (expected 'os', 'service', 'banner' or 'port')"
            )),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchKind::Os => "os",
            SearchKind::Service => "service",
            SearchKind::Banner => "banner",
            SearchKind::Port => "port",
        };
        f.write_str(name)
    }
}

/// Emits `host` once for every open port accepted by `hits`, which returns how
/// many times that port matched.
fn per_open_port<'a, F>(report: &'a ScanReport, hits: F) -> Vec<&'a Host>
where
    F: Fn(&Port) -> usize,
{
    let mut found = Vec::new();
    for host in alive(report) {
        for port in open_ports(host) {
            for _ in 0..hits(port) {
                found.push(host);
            }
        }
    }
    found
}

/// Hosts with an open port whose id equals `port_id` exactly.
pub fn with_open_port<'a>(report: &'a ScanReport, port_id: &str) -> Vec<&'a Host> {
    per_open_port(report, |p| usize::from(p.id == port_id))
}

/// Hosts with an open port whose service name contains `query`.
pub fn with_service<'a>(report: &'a ScanReport, query: &str) -> Vec<&'a Host> {
    per_open_port(report, |p| usize::from(p.service.name.contains(query)))
}

/// Hosts with an open port whose product or service fingerprint contains
/// `query`. A port matching on both counts twice.
pub fn with_banner<'a>(report: &'a ScanReport, query: &str) -> Vec<&'a Host> {
    per_open_port(report, |p| {
        usize::from(p.service.product.contains(query))
            + usize::from(p.service.fingerprint.contains(query))
    })
}

/// Hosts whose OS guess contains `query`. Each host is evaluated once.
pub fn with_os<'a>(report: &'a ScanReport, query: &str) -> Vec<&'a Host> {
    alive(report)
        .into_iter()
        .filter(|h| os_guess(h).contains(query))
        .collect()
}

/// Drops repeated hosts, keeping the first appearance of each.
///
/// Hosts are compared by identity, not by value.
pub fn unique<'a>(hosts: Vec<&'a Host>) -> Vec<&'a Host> {
    let mut seen: HashSet<*const Host> = HashSet::with_capacity(hosts.len());
    hosts
        .into_iter()
        .filter(|h| seen.insert(*h as *const Host))
        .collect()
}

pub fn search<'a>(
    report: &'a ScanReport,
    kind: SearchKind,
    query: &str,
    dedup: bool,
) -> Vec<&'a Host> {
    let hosts = match kind {
        SearchKind::Os => with_os(report, query),
        SearchKind::Service => with_service(report, query),
        SearchKind::Banner => with_banner(report, query),
        SearchKind::Port => with_open_port(report, query),
    };

    if dedup { unique(hosts) } else { hosts }
}
