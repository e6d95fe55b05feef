use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(rename = "@protocol")]
    pub protocol: String,
    /// Port number as written in the report. Not validated as numeric.
    #[serde(rename = "@portid")]
    pub id: String,
    pub state: PortState,
    pub service: Service,
    #[serde(rename = "script")]
    pub scripts: Vec<Script>,
}

impl Port {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortState {
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@reason")]
    pub reason: String,
    #[serde(rename = "@reason_ttl")]
    pub reason_ttl: String,
}

impl PortState {
    /// Openness is decided by the state string alone.
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@product")]
    pub product: String,
    #[serde(rename = "@version")]
    pub version: String,
    /// Raw service fingerprint submitted when the service was not recognised.
    #[serde(rename = "@servicefp")]
    pub fingerprint: String,
    #[serde(rename = "@extrainfo")]
    pub extra_info: String,
    #[serde(rename = "@ostype")]
    pub os_type: String,
    #[serde(rename = "@method")]
    pub method: String,
    #[serde(rename = "@conf")]
    pub confidence: String,
    #[serde(rename = "cpe")]
    pub cpes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Script {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@output")]
    pub output: String,
}
