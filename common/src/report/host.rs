use serde::Deserialize;

use super::os::OsInfo;
use super::port::Port;
use super::raw::RawHost;
use super::trace::TraceInfo;

/// Address family tag used by the scanner for hardware addresses.
pub const MAC_ADDR_TYPE: &str = "mac";

/// A single scanned host.
///
/// A host always has exactly one primary [`Address`]. When the report also
/// lists a hardware address it is kept separately in `hardware_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawHost")]
pub struct Host {
    pub start_time: String,
    pub end_time: String,
    pub status: Status,
    pub address: Address,
    pub hardware_address: Option<Address>,
    pub hostnames: Vec<HostName>,
    pub ports: Vec<Port>,
    pub os: OsInfo,
    /// Hop count to the host, when the scanner measured it.
    pub distance: Option<String>,
    pub sequences: Sequences,
    pub trace: TraceInfo,
    pub times: Times,
}

impl Host {
    /// First reported hostname, if any.
    pub fn primary_hostname(&self) -> Option<&str> {
        self.hostnames.first().map(|h| h.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    /// `up`, `down` or `unknown`.
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@reason")]
    pub reason: String,
}

impl Status {
    pub fn is_up(&self) -> bool {
        self.state == "up"
    }

    pub fn is_down(&self) -> bool {
        self.state == "down"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: String,
    /// `ipv4`, `ipv6` or `mac`.
    #[serde(rename = "@addrtype")]
    pub addr_type: String,
    #[serde(rename = "@vendor")]
    pub vendor: String,
}

impl Address {
    pub fn is_hardware(&self) -> bool {
        self.addr_type == MAC_ADDR_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostName {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub kind: String,
}

/// Sequence predictability classifications gathered during OS detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequences {
    pub tcp: TcpSequence,
    pub ip_id: SequenceClass,
    pub tcp_ts: SequenceClass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TcpSequence {
    #[serde(rename = "@index")]
    pub index: String,
    #[serde(rename = "@difficulty")]
    pub difficulty: String,
    #[serde(rename = "@values")]
    pub values: String,
}

/// Classification label plus the raw samples it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SequenceClass {
    #[serde(rename = "@class")]
    pub class: String,
    #[serde(rename = "@values")]
    pub values: String,
}

/// Round-trip timing statistics, in microseconds as written by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Times {
    #[serde(rename = "@srtt")]
    pub srtt: String,
    #[serde(rename = "@rttvar")]
    pub rttvar: String,
    #[serde(rename = "@to")]
    pub timeout: String,
}
