use std::sync::Arc;
use std::thread;

use anyhow::Context;
use nwa_core::ParseError;
use nwa_core::loader::{self, BytesSource, FileSource};
use nwa_core::store::ReportStore;

use super::fixtures::*;

#[tokio::test]
async fn loads_report_from_file() -> anyhow::Result<()> {
    let store = ReportStore::new();
    let source = FileSource::new(fixture_path("network.xml"));

    let report = loader::load(&store, &source).await?;

    assert_eq!(report.hosts.len(), 5);
    let current = store.current().context("store should hold the report")?;
    assert!(Arc::ptr_eq(&report, &current));
    Ok(())
}

#[tokio::test]
async fn malformed_reload_leaves_active_report() {
    let store = ReportStore::new();
    loader::load(&store, &FileSource::new(fixture_path("two_hosts.xml")))
        .await
        .expect("fixture should load");

    let broken = BytesSource::new("truncated", TRUNCATED.to_vec());
    let result = loader::load(&store, &broken).await;

    assert!(matches!(result, Err(ParseError::Malformed(_))));
    let current = store.current().expect("previous report kept");
    assert_eq!(current.hosts.len(), 2);
    assert_eq!(current.hosts[0].address.addr, "192.168.56.10");
}

#[tokio::test]
async fn missing_file_leaves_active_report() -> anyhow::Result<()> {
    let store = ReportStore::new();
    loader::load(&store, &BytesSource::new("network", NETWORK.as_bytes().to_vec())).await?;

    let result = loader::load(&store, &FileSource::new(fixture_path("missing.xml"))).await;

    assert!(matches!(result, Err(ParseError::IoFailure(_))));
    assert_eq!(store.current().map(|r| r.hosts.len()), Some(5));
    Ok(())
}

#[test]
fn readers_see_whole_reports_during_replacement() {
    let store = ReportStore::new();
    store.load_bytes(TWO_HOSTS.as_bytes()).expect("fixture should load");

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let report = store.current().expect("a report is always loaded");
                    let len = report.hosts.len();
                    assert!(len == 2 || len == 5, "saw partial report with {len} hosts");
                }
            });
        }

        scope.spawn(|| {
            for i in 0..50 {
                let text = if i % 2 == 0 { NETWORK } else { TWO_HOSTS };
                store.load_bytes(text.as_bytes()).expect("fixture should load");
            }
        });
    });
}
