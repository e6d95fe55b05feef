//! # Scan Report Model
//!
//! Typed representation of a scan report as written by the port/host discovery
//! tool (`<nmaprun>` documents).
//!
//! Every attribute is kept as the exact text found in the document. Missing
//! attributes and elements become empty strings or empty sequences, so any
//! well-formed document maps onto this model.
//!
//! The tag and attribute names in the `serde` renames are an external contract
//! with the scanner's output format and must not change.

use serde::Deserialize;

mod host;
mod os;
mod port;
mod raw;
mod trace;

pub use host::{Address, Host, HostName, SequenceClass, Sequences, Status, TcpSequence, Times};
pub use os::{OsClass, OsInfo, OsMatch, PortUsed};
pub use port::{Port, PortState, Script, Service};
pub use trace::{Hop, TraceInfo};

/// Root of a parsed report. Owns every host it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "raw::RawReport")]
pub struct ScanReport {
    pub run: RunInfo,
    /// One record per scanned protocol.
    pub scan_info: Vec<ScanInfo>,
    /// Hosts in document order.
    pub hosts: Vec<Host>,
    pub stats: RunStats,
}

/// Invocation metadata carried by the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInfo {
    pub scanner: String,
    pub args: String,
    pub start: String,
    pub start_str: String,
    pub version: String,
    pub xml_output_version: String,
    pub verbose: String,
    pub debugging: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanInfo {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@numservices")]
    pub num_services: String,
    #[serde(rename = "@services")]
    pub services: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunStats {
    pub finished: Finished,
    pub hosts: HostCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Finished {
    #[serde(rename = "@time")]
    pub time: String,
    #[serde(rename = "@timestr")]
    pub time_str: String,
    #[serde(rename = "@elapsed")]
    pub elapsed: String,
    #[serde(rename = "@summary")]
    pub summary: String,
    #[serde(rename = "@exit")]
    pub exit: String,
}

/// Host counters as reported by the scanner itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostCounts {
    #[serde(rename = "@up")]
    pub up: String,
    #[serde(rename = "@down")]
    pub down: String,
    #[serde(rename = "@total")]
    pub total: String,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
