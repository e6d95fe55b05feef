use colored::*;
use nwa_common::report::{Address, Host, Port, Service};
use nwa_core::query;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn address_to_detail(address: &Address) -> Detail {
    let (key, color) = match address.addr_type.as_str() {
        "ipv6" => ("IPv6", colors::IPV6_ADDR),
        "mac" => ("MAC", colors::MAC_ADDR),
        _ => ("IPv4", colors::IPV4_ADDR),
    };
    (key.to_string(), address.addr.color(color))
}

pub fn hardware_to_detail(address: Option<&Address>) -> Option<Detail> {
    let mac = address?;
    let value: String = match mac.vendor.as_str() {
        "" => mac.addr.clone(),
        vendor => format!("{} ({vendor})", mac.addr),
    };
    Some(("MAC".to_string(), value.color(colors::MAC_ADDR)))
}

pub fn os_to_detail(host: &Host) -> Option<Detail> {
    match query::os_guess(host) {
        "" => None,
        guess => Some(("OS".to_string(), guess.normal())),
    }
}

/// Compact `22/tcp ssh, 80/tcp http` listing of the open ports.
pub fn open_ports_to_detail(host: &Host) -> Option<Detail> {
    let ports: Vec<&Port> = query::open_ports(host);
    if ports.is_empty() {
        return None;
    }

    let joined: String = ports
        .iter()
        .map(|p| match p.service.name.as_str() {
            "" => format!("{}/{}", p.id, p.protocol),
            name => format!("{}/{} {}", p.id, p.protocol, name),
        })
        .collect::<Vec<String>>()
        .join(", ");

    Some(("Ports".to_string(), joined.color(colors::PORT_OPEN)))
}

pub fn host_details(host: &Host) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![address_to_detail(&host.address)];

    if let Some(mac_detail) = hardware_to_detail(host.hardware_address.as_ref()) {
        details.push(mac_detail);
    }

    if let Some(os_detail) = os_to_detail(host) {
        details.push(os_detail);
    }

    if let Some(ports_detail) = open_ports_to_detail(host) {
        details.push(ports_detail);
    }

    details
}

/// `product version (extra info)`, skipping whatever is missing.
pub fn banner(service: &Service) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in [&service.product, &service.version] {
        if !part.is_empty() {
            parts.push(part);
        }
    }

    let mut banner: String = parts.join(" ");
    if !service.extra_info.is_empty() {
        if !banner.is_empty() {
            banner.push(' ');
        }
        banner.push_str(&format!("({})", service.extra_info));
    }
    banner
}

pub fn port_line(port: &Port) -> String {
    let state: ColoredString = match port.is_open() {
        true => port.state.state.color(colors::PORT_OPEN),
        false => port.state.state.color(colors::PORT_OTHER),
    };
    let id: String = format!("{}/{}", port.id, port.protocol);

    format!(
        "{:<10} {:<10} {:<14} {}",
        id.color(colors::ACCENT),
        state,
        port.service.name,
        banner(&port.service)
    )
    .trim_end()
    .to_string()
}

/// Hostname to title a host with, falling back to its address.
pub fn host_title(host: &Host) -> &str {
    host.primary_hostname()
        .filter(|name| !name.is_empty())
        .unwrap_or(&host.address.addr)
}
