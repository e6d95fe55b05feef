//! Document-shaped records that mirror the report's nesting exactly.
//!
//! The public model flattens a few wrapper elements (`<hostnames>`, `<ports>`,
//! `<distance>`, `<osfingerprint>`) and the root attributes; these records
//! absorb that nesting before being converted.

use serde::Deserialize;

use super::host::{Address, Host, HostName, SequenceClass, Sequences, Status, TcpSequence, Times};
use super::os::{OsInfo, OsMatch, PortUsed};
use super::port::Port;
use super::trace::TraceInfo;
use super::{RunInfo, RunStats, ScanInfo, ScanReport};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawReport {
    #[serde(rename = "@scanner")]
    scanner: String,
    #[serde(rename = "@args")]
    args: String,
    #[serde(rename = "@start")]
    start: String,
    #[serde(rename = "@startstr")]
    start_str: String,
    #[serde(rename = "@version")]
    version: String,
    #[serde(rename = "@xmloutputversion")]
    xml_output_version: String,
    verbose: Level,
    debugging: Level,
    #[serde(rename = "scaninfo")]
    scan_info: Vec<ScanInfo>,
    #[serde(rename = "host")]
    hosts: Vec<Host>,
    runstats: RunStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Level {
    #[serde(rename = "@level")]
    level: String,
}

impl From<RawReport> for ScanReport {
    fn from(raw: RawReport) -> Self {
        Self {
            run: RunInfo {
                scanner: raw.scanner,
                args: raw.args,
                start: raw.start,
                start_str: raw.start_str,
                version: raw.version,
                xml_output_version: raw.xml_output_version,
                verbose: raw.verbose.level,
                debugging: raw.debugging.level,
            },
            scan_info: raw.scan_info,
            hosts: raw.hosts,
            stats: raw.runstats,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawHost {
    #[serde(rename = "@starttime")]
    start_time: String,
    #[serde(rename = "@endtime")]
    end_time: String,
    status: Status,
    #[serde(rename = "address")]
    addresses: Vec<Address>,
    hostnames: HostNames,
    ports: Ports,
    os: OsInfo,
    distance: Option<Distance>,
    #[serde(rename = "tcpsequence")]
    tcp_sequence: TcpSequence,
    #[serde(rename = "ipidsequence")]
    ip_id_sequence: SequenceClass,
    #[serde(rename = "tcptssequence")]
    tcp_ts_sequence: SequenceClass,
    trace: TraceInfo,
    times: Times,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HostNames {
    #[serde(rename = "hostname")]
    names: Vec<HostName>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Ports {
    #[serde(rename = "port")]
    ports: Vec<Port>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Distance {
    #[serde(rename = "@value")]
    value: String,
}

impl From<RawHost> for Host {
    fn from(raw: RawHost) -> Self {
        let hardware_address = raw.addresses.iter().find(|a| a.is_hardware()).cloned();
        let address = primary_address(raw.addresses);

        Self {
            start_time: raw.start_time,
            end_time: raw.end_time,
            status: raw.status,
            address,
            hardware_address,
            hostnames: raw.hostnames.names,
            ports: raw.ports.ports,
            os: raw.os,
            distance: raw.distance.map(|d| d.value),
            sequences: Sequences {
                tcp: raw.tcp_sequence,
                ip_id: raw.ip_id_sequence,
                tcp_ts: raw.tcp_ts_sequence,
            },
            trace: raw.trace,
            times: raw.times,
        }
    }
}

/// Picks the network-layer address, falling back to whatever was listed first.
fn primary_address(addresses: Vec<Address>) -> Address {
    let idx = addresses.iter().position(|a| !a.is_hardware()).unwrap_or(0);
    addresses.into_iter().nth(idx).unwrap_or_default()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawOs {
    #[serde(rename = "portused")]
    ports_used: Vec<PortUsed>,
    #[serde(rename = "osmatch")]
    matches: Vec<OsMatch>,
    #[serde(rename = "osfingerprint")]
    fingerprint: OsFingerprint,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OsFingerprint {
    #[serde(rename = "@fingerprint")]
    fingerprint: String,
}

impl From<RawOs> for OsInfo {
    fn from(raw: RawOs) -> Self {
        Self {
            ports_used: raw.ports_used,
            matches: raw.matches,
            fingerprint: raw.fingerprint.fingerprint,
        }
    }
}
