use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceInfo {
    #[serde(rename = "@port")]
    pub port: String,
    #[serde(rename = "@proto")]
    pub protocol: String,
    #[serde(rename = "hop")]
    pub hops: Vec<Hop>,
}

/// One hop of a traceroute. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hop {
    #[serde(rename = "@ttl")]
    pub ttl: String,
    #[serde(rename = "@rtt")]
    pub rtt: String,
    #[serde(rename = "@ipaddr")]
    pub ip_addr: String,
    #[serde(rename = "@host")]
    pub host: String,
}
