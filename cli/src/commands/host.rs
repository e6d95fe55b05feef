use colored::*;
use nwa_common::config::Config;
use nwa_common::report::{Host, ScanReport};
use nwa_core::query;

use crate::mprint;
use crate::terminal::{colors, format, print, views};

pub fn host(report: &ScanReport, addr: &str, cfg: &Config) -> anyhow::Result<()> {
    let Some(host) = query::find_host(report, addr) else {
        anyhow::bail!("no alive host with address {addr} in this report");
    };

    if cfg.json {
        return print::json(&views::HostView::from(host));
    }

    print::header(format::host_title(host), cfg.quiet);
    print_identity(host);

    mprint!();
    print::header("ports", cfg.quiet);
    print_ports(host);

    if !host.os.matches.is_empty() {
        mprint!();
        print::header("operating system", cfg.quiet);
        print_os(host);
    }

    if !host.trace.hops.is_empty() {
        mprint!();
        print::header("traceroute", cfg.quiet);
        super::trace::print_hops(host);
    }

    Ok(())
}

fn print_identity(host: &Host) {
    let (key, value) = format::address_to_detail(&host.address);
    print::aligned_line(&key, value);

    if let Some((key, value)) = format::hardware_to_detail(host.hardware_address.as_ref()) {
        print::aligned_line(&key, value);
    }

    for hostname in &host.hostnames {
        print::aligned_line("Hostname", format!("{} ({})", hostname.name, hostname.kind));
    }

    let status: String = match host.status.reason.as_str() {
        "" => host.status.state.clone(),
        reason => format!("{} ({reason})", host.status.state),
    };
    print::aligned_line("Status", status.green());

    if let Some(distance) = &host.distance {
        let unit: &str = if distance == "1" { "hop" } else { "hops" };
        print::aligned_line("Distance", format!("{distance} {unit}"));
    }

    if !host.times.srtt.is_empty() {
        print::aligned_line("Srtt", format!("{} us", host.times.srtt));
    }

    let tcp = &host.sequences.tcp;
    if !tcp.difficulty.is_empty() {
        print::aligned_line("TCP seq", format!("{} ({})", tcp.difficulty, tcp.index));
    }
    if !host.sequences.ip_id.class.is_empty() {
        print::aligned_line("IP ID seq", host.sequences.ip_id.class.as_str());
    }
}

fn print_ports(host: &Host) {
    if host.ports.is_empty() {
        print::print_status("No ports reported");
        return;
    }

    for port in &host.ports {
        print::print_status(format::port_line(port));
        for script in &port.scripts {
            let id: ColoredString = script.id.color(colors::ACCENT);
            for (i, line) in script.output.trim().lines().enumerate() {
                let lead: String = if i == 0 { format!("|_ {id}: ") } else { String::from("|  ") };
                print::print(&format!("    {}{}", lead.bright_black(), line));
            }
        }
    }
}

fn print_os(host: &Host) {
    let guess: &str = query::os_guess(host);
    if !guess.is_empty() {
        print::aligned_line("Best guess", guess.bold());
    }

    for os_match in &host.os.matches {
        print::print_status(format!(
            "{:>4}% {}",
            os_match.accuracy.color(colors::ACCENT),
            os_match.name
        ));
    }
}
