//! Basic read-only views over a report: liveness, open ports, OS guess.

use nwa_common::report::{Host, Port, ScanReport};

/// Hosts reported `up`, in document order.
pub fn alive(report: &ScanReport) -> Vec<&Host> {
    report.hosts.iter().filter(|h| h.status.is_up()).collect()
}

/// Hosts reported `down`, in document order.
///
/// Hosts in any other state appear in neither [`alive`] nor [`dead`].
pub fn dead(report: &ScanReport) -> Vec<&Host> {
    report.hosts.iter().filter(|h| h.status.is_down()).collect()
}

pub fn open_ports(host: &Host) -> Vec<&Port> {
    host.ports.iter().filter(|p| p.is_open()).collect()
}

/// Name of the best OS candidate.
///
/// Only reported when the scanner offered more than one candidate; a host
/// with a single match yields an empty guess. Candidates are taken in the
/// order the report lists them.
pub fn os_guess(host: &Host) -> &str {
    match host.os.matches.as_slice() {
        [first, _, ..] => &first.name,
        _ => "",
    }
}

/// First alive host whose primary address equals `addr`.
pub fn find_host<'a>(report: &'a ScanReport, addr: &str) -> Option<&'a Host> {
    report
        .hosts
        .iter()
        .find(|h| h.status.is_up() && h.address.addr == addr)
}
