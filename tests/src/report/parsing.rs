use nwa_core::parser::{self, ParseError};

use super::fixtures::*;

#[test]
fn two_hosts_report_parses() {
    let report = load(TWO_HOSTS);

    assert_eq!(report.run.scanner, "nmap");
    assert_eq!(report.run.start_str, "Mon Apr  1 19:33:20 2024");
    assert_eq!(report.hosts.len(), 2);
    assert_eq!(report.stats.hosts.up, "1");

    let web = &report.hosts[0];
    assert_eq!(web.address.addr, "192.168.56.10");
    assert!(web.hostnames.is_empty());
    assert_eq!(web.ports.len(), 1);
    assert_eq!(web.ports[0].service.product, "Apache httpd");
    assert_eq!(web.ports[0].service.cpes, vec!["cpe:/a:apache:http_server:2.4.57"]);
}

#[test]
fn hardware_address_does_not_replace_ip() {
    let report = load(TWO_HOSTS);
    let web = &report.hosts[0];

    assert_eq!(web.address.addr_type, "ipv4");
    let mac = web.hardware_address.as_ref().expect("mac address");
    assert_eq!(mac.addr, "08:00:27:AA:BB:CC");
    assert_eq!(mac.vendor, "Oracle VirtualBox virtual NIC");
    assert!(report.hosts[1].hardware_address.is_none());
}

#[test]
fn attribute_text_survives_verbatim() {
    let report = load(NETWORK);
    let gateway = &report.hosts[0];

    assert_eq!(report.run.verbose, "1");
    assert_eq!(report.scan_info.len(), 2);
    assert_eq!(report.scan_info[1].protocol, "udp");
    assert_eq!(report.stats.finished.elapsed, "190.42");

    assert_eq!(gateway.status.reason, "echo-reply");
    assert_eq!(gateway.ports[0].service.version, "9.2p1 Debian 2");
    assert_eq!(gateway.ports[0].state.reason_ttl, "62");
    assert_eq!(gateway.ports[3].protocol, "udp");
    assert_eq!(gateway.os.matches[1].accuracy, "94");
    assert_eq!(gateway.os.matches[0].line, "67986");
    assert_eq!(gateway.os.matches[0].classes[0].family, "Linux");
    assert_eq!(gateway.os.ports_used.len(), 2);
    assert_eq!(gateway.sequences.tcp.values, "6E9F6E4C,1E1A7A26,9C3EDF6E");
    assert_eq!(gateway.sequences.tcp_ts.class, "1000HZ");
    assert_eq!(gateway.trace.port, "443");
    assert_eq!(gateway.trace.hops[0].rtt, "0.61");
    assert_eq!(gateway.times.rttvar, "228");
}

#[test]
fn escaped_text_is_decoded() {
    let report = load(NETWORK);

    let script = &report.hosts[0].ports[0].scripts[0];
    assert_eq!(script.id, "ssh-hostkey");
    assert!(script.output.contains("\n  256 1d:22:0b:8e (ED25519)"));

    let proxy = &report.hosts[1].ports[1];
    assert!(proxy.service.fingerprint.contains("\"HTTP/1.0\\x20200\\x20OK"));
    assert!(proxy.service.fingerprint.contains("OpenSSH-gateway"));
}

#[test]
fn hosts_between_progress_records_are_all_kept() {
    let report = load(NETWORK);
    assert_eq!(addrs(&report.hosts.iter().collect::<Vec<_>>()), vec![
        "10.20.0.1",
        "10.20.0.4",
        "10.20.0.5",
        "10.20.0.6",
        "10.20.0.7",
    ]);
}

#[test]
fn empty_scan_parses_to_zero_hosts() {
    let report = load(EMPTY);
    assert!(report.is_empty());
    assert_eq!(report.stats.hosts.total, "4");
}

#[test]
fn truncated_report_is_malformed() {
    assert!(matches!(parser::parse(TRUNCATED), Err(ParseError::Malformed(_))));
}

#[test]
fn reading_fixture_from_disk() {
    let report = parser::parse_file(fixture_path("two_hosts.xml")).expect("file should parse");
    assert_eq!(report.hosts.len(), 2);
}
