//! Traceroute graph for visualising the path to a host.

use nwa_common::report::Host;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceNode {
    /// Hop ttl, used to group nodes by distance.
    #[serde(serialize_with = "numeric_text")]
    pub group: String,
    pub name: String,
    pub rtt: String,
}

/// Edge between hop `source` and hop `target`, weighted by the source's rtt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceLink {
    pub source: usize,
    pub target: usize,
    #[serde(serialize_with = "numeric_text")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraceGraph {
    pub nodes: Vec<TraceNode>,
    pub links: Vec<TraceLink>,
}

/// Writes report text as a JSON number when it holds one, as a string otherwise.
fn numeric_text<S: Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(n) = text.parse::<u64>() {
        return serializer.serialize_u64(n);
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => serializer.serialize_f64(n),
        _ => serializer.serialize_str(text),
    }
}

/// Builds one node per hop and one link per consecutive pair of hops.
pub fn trace_graph(host: &Host) -> TraceGraph {
    let hops = &host.trace.hops;

    let nodes = hops
        .iter()
        .map(|hop| TraceNode {
            group: hop.ttl.clone(),
            name: hop.ip_addr.clone(),
            rtt: hop.rtt.clone(),
        })
        .collect();

    let links = hops
        .windows(2)
        .enumerate()
        .map(|(i, pair)| TraceLink {
            source: i,
            target: i + 1,
            value: pair[0].rtt.clone(),
        })
        .collect();

    TraceGraph { nodes, links }
}
