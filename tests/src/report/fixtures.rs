use std::path::PathBuf;

use nwa_common::report::{Host, ScanReport};
use nwa_core::parser;

pub const TWO_HOSTS: &str = include_str!("../../fixtures/two_hosts.xml");
pub const NETWORK: &str = include_str!("../../fixtures/network.xml");
pub const EMPTY: &str = include_str!("../../fixtures/empty.xml");
pub const TRUNCATED: &[u8] = include_bytes!("../../fixtures/truncated.xml");

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn load(text: &str) -> ScanReport {
    parser::parse_str(text).expect("fixture should parse")
}

pub fn addrs(hosts: &[&Host]) -> Vec<String> {
    hosts.iter().map(|h| h.address.addr.clone()).collect()
}
