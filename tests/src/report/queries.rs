use nwa_common::report::ScanReport;
use nwa_core::census::{self, CensusEntry, CensusKind};
use nwa_core::search::{self, SearchKind};
use nwa_core::{query, trace};

use super::fixtures::*;

fn entry(name: &str, count: usize) -> CensusEntry {
    CensusEntry {
        name: name.to_string(),
        count,
    }
}

#[test]
fn two_hosts_scenario() {
    let report = load(TWO_HOSTS);

    assert_eq!(addrs(&query::alive(&report)), vec!["192.168.56.10"]);
    assert_eq!(addrs(&query::dead(&report)), vec!["192.168.56.11"]);
    assert_eq!(census::port_census(&report), vec![entry("80", 1)]);
    assert_eq!(addrs(&search::with_service(&report, "http")), vec!["192.168.56.10"]);
}

#[test]
fn liveness_partition_excludes_unknown_hosts() {
    let report = load(NETWORK);
    let alive = query::alive(&report);
    let dead = query::dead(&report);

    assert_eq!(addrs(&alive), vec!["10.20.0.1", "10.20.0.4", "10.20.0.5"]);
    assert_eq!(addrs(&dead), vec!["10.20.0.6"]);
    assert!(alive.iter().all(|a| !dead.iter().any(|d| std::ptr::eq(*a, *d))));
    assert!(!addrs(&alive).contains(&"10.20.0.7".to_string()));
}

#[test]
fn open_ports_only_include_open_state() {
    let report = load(NETWORK);

    for host in &report.hosts {
        let open = query::open_ports(host);
        assert!(open.iter().all(|p| p.state.state == "open"));
        assert!(open.iter().all(|p| host.ports.iter().any(|q| std::ptr::eq(*p, q))));
    }

    let ids: Vec<&str> = query::open_ports(&report.hosts[0])
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["22", "2222", "53"]);
}

#[test]
fn os_guess_requires_several_candidates() {
    let report = load(NETWORK);

    assert_eq!(query::os_guess(&report.hosts[0]), "Linux 5.0 - 5.14");
    assert_eq!(query::os_guess(&report.hosts[1]), "");
    assert_eq!(query::os_guess(&report.hosts[2]), "Linux 5.0 - 5.14");
    assert_eq!(query::os_guess(&report.hosts[3]), "");
}

#[test]
fn censuses_keep_first_seen_order() {
    let report = load(NETWORK);

    assert_eq!(
        census::census(&report, CensusKind::Port),
        vec![
            entry("22", 2),
            entry("2222", 1),
            entry("53", 1),
            entry("445", 1),
            entry("8080", 1),
            entry("80", 1),
        ]
    );
    assert_eq!(
        census::census(&report, CensusKind::Os),
        vec![entry("Linux 5.0 - 5.14", 2), entry("", 1)]
    );
}

#[test]
fn port_census_total_matches_open_ports() {
    let report = load(NETWORK);

    let total: usize = census::port_census(&report).iter().map(|e| e.count).sum();
    let open: usize = query::alive(&report)
        .iter()
        .map(|h| query::open_ports(h).len())
        .sum();
    assert_eq!(total, open);
}

#[test]
fn service_search_repeats_hosts_per_port() {
    let report = load(NETWORK);

    assert_eq!(
        addrs(&search::with_service(&report, "ssh")),
        vec!["10.20.0.1", "10.20.0.1", "10.20.0.5"]
    );
    assert_eq!(
        addrs(&search::search(&report, SearchKind::Service, "ssh", true)),
        vec!["10.20.0.1", "10.20.0.5"]
    );
}

#[test]
fn banner_search_reads_product_and_fingerprint() {
    let report = load(NETWORK);

    assert_eq!(
        addrs(&search::with_banner(&report, "OpenSSH")),
        vec!["10.20.0.1", "10.20.0.1", "10.20.0.4", "10.20.0.5"]
    );
    assert_eq!(addrs(&search::with_banner(&report, "nginx")), vec!["10.20.0.5"]);
}

#[test]
fn port_and_os_searches() {
    let report = load(NETWORK);

    assert_eq!(addrs(&search::with_open_port(&report, "22")), vec!["10.20.0.1", "10.20.0.5"]);
    assert!(search::with_open_port(&report, "443").is_empty());
    assert_eq!(addrs(&search::with_os(&report, "Linux")), vec!["10.20.0.1", "10.20.0.5"]);
    assert!(search::with_os(&report, "Windows").is_empty());
}

#[test]
fn lookup_and_trace_graph() {
    let report = load(NETWORK);

    assert!(query::find_host(&report, "10.20.0.6").is_none());
    let gateway = query::find_host(&report, "10.20.0.1").expect("gateway is alive");

    let graph = trace::trace_graph(gateway);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[1].name, "10.20.0.1");
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].value, "0.61");
}

#[test]
fn empty_report_answers_every_query_with_nothing() {
    for report in [load(EMPTY), ScanReport::default()] {
        assert!(query::alive(&report).is_empty());
        assert!(query::dead(&report).is_empty());
        assert!(census::port_census(&report).is_empty());
        assert!(census::os_census(&report).is_empty());
        assert!(search::with_open_port(&report, "80").is_empty());
        assert!(search::with_service(&report, "").is_empty());
        assert!(search::with_banner(&report, "").is_empty());
        assert!(search::with_os(&report, "").is_empty());
    }
}
