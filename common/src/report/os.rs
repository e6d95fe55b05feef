use serde::Deserialize;

use super::raw::RawOs;

/// OS detection results for a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawOs")]
pub struct OsInfo {
    pub ports_used: Vec<PortUsed>,
    /// Candidates in the order the scanner ranked them.
    pub matches: Vec<OsMatch>,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortUsed {
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@proto")]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OsMatch {
    #[serde(rename = "@name")]
    pub name: String,
    /// Percentage, as text.
    #[serde(rename = "@accuracy")]
    pub accuracy: String,
    #[serde(rename = "@line")]
    pub line: String,
    #[serde(rename = "osclass")]
    pub classes: Vec<OsClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OsClass {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@vendor")]
    pub vendor: String,
    #[serde(rename = "@osfamily")]
    pub family: String,
    #[serde(rename = "@osgen")]
    pub generation: String,
    #[serde(rename = "@accuracy")]
    pub accuracy: String,
    #[serde(rename = "cpe")]
    pub cpes: Vec<String>,
}
