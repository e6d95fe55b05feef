//! JSON shapes for the `--json` output.

use nwa_common::report::{Host, Port};
use nwa_core::query;
use serde::Serialize;

#[derive(Serialize)]
pub struct HostView<'a> {
    pub address: &'a str,
    pub address_type: &'a str,
    pub hostnames: Vec<&'a str>,
    pub status: &'a str,
    pub os: &'a str,
    pub open_ports: Vec<PortView<'a>>,
}

#[derive(Serialize)]
pub struct PortView<'a> {
    pub id: &'a str,
    pub protocol: &'a str,
    pub state: &'a str,
    pub service: &'a str,
    pub product: &'a str,
    pub version: &'a str,
    pub cpes: &'a [String],
}

impl<'a> From<&'a Host> for HostView<'a> {
    fn from(host: &'a Host) -> Self {
        Self {
            address: &host.address.addr,
            address_type: &host.address.addr_type,
            hostnames: host.hostnames.iter().map(|h| h.name.as_str()).collect(),
            status: &host.status.state,
            os: query::os_guess(host),
            open_ports: query::open_ports(host).into_iter().map(PortView::from).collect(),
        }
    }
}

impl<'a> From<&'a Port> for PortView<'a> {
    fn from(port: &'a Port) -> Self {
        Self {
            id: &port.id,
            protocol: &port.protocol,
            state: &port.state.state,
            service: &port.service.name,
            product: &port.service.product,
            version: &port.service.version,
            cpes: &port.service.cpes,
        }
    }
}

pub fn hosts<'a>(hosts: &[&'a Host]) -> Vec<HostView<'a>> {
    hosts.iter().map(|h| HostView::from(*h)).collect()
}
