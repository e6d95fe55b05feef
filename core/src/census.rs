//! Grouped counts over the alive hosts of a report.
//!
//! Entries appear in the order their key was first seen, never sorted.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use nwa_common::report::ScanReport;
use serde::Serialize;

use crate::query::{alive, open_ports, os_guess};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusEntry {
    pub name: String,
    pub count: usize,
}

/// What a census groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CensusKind {
    Port,
    Os,
}

impl FromStr for CensusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "port" => Ok(CensusKind::Port),
            "os" => Ok(CensusKind::Os),
            _ => Err(format!("invalid census kind: {s} (expected 'port' or 'os')")),
        }
    }
}

impl fmt::Display for CensusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CensusKind::Port => write!(f, "port"),
            CensusKind::Os => write!(f, "os"),
        }
    }
}

/// Keyed counter that remembers first-seen order.
#[derive(Default)]
struct Tally<'a> {
    index: HashMap<&'a str, usize>,
    entries: Vec<CensusEntry>,
}

impl<'a> Tally<'a> {
    fn bump(&mut self, name: &'a str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(name, self.entries.len());
                self.entries.push(CensusEntry {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    fn finish(self) -> Vec<CensusEntry> {
        self.entries
    }
}

/// Number of open ports per port id across alive hosts.
pub fn port_census(report: &ScanReport) -> Vec<CensusEntry> {
    let mut tally = Tally::default();
    for host in alive(report) {
        for port in open_ports(host) {
            tally.bump(&port.id);
        }
    }
    tally.finish()
}

/// Number of alive hosts per OS guess.
///
/// Hosts without a guess are counted under the empty name.
pub fn os_census(report: &ScanReport) -> Vec<CensusEntry> {
    let mut tally = Tally::default();
    for host in alive(report) {
        tally.bump(os_guess(host));
    }
    tally.finish()
}

pub fn census(report: &ScanReport, kind: CensusKind) -> Vec<CensusEntry> {
    match kind {
        CensusKind::Port => port_census(report),
        CensusKind::Os => os_census(report),
    }
}
