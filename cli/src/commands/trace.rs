use colored::*;
use nwa_common::config::Config;
use nwa_common::report::{Host, ScanReport};
use nwa_core::query;
use nwa_core::trace::trace_graph;

use crate::terminal::{colors, print};

pub fn trace(report: &ScanReport, addr: &str, cfg: &Config) -> anyhow::Result<()> {
    let Some(host) = query::find_host(report, addr) else {
        anyhow::bail!("no alive host with address {addr} in this report");
    };

    if cfg.json {
        return print::json(&trace_graph(host));
    }

    print::header(&format!("path to {addr}"), cfg.quiet);
    if host.trace.hops.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print_hops(host);
    Ok(())
}

pub fn print_hops(host: &Host) {
    for hop in &host.trace.hops {
        let name: String = match hop.host.as_str() {
            "" => hop.ip_addr.clone(),
            hostname => format!("{hostname} ({})", hop.ip_addr),
        };
        print::print_status(format!(
            "{:>3}  {:>8} ms  {}",
            hop.ttl.color(colors::ACCENT),
            hop.rtt,
            name.color(colors::IPV4_ADDR)
        ));
    }
}
