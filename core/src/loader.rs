//! # Report Loading
//!
//! Fills a [`ReportStore`] from a [`ReportSource`].
//!
//! Bytes are fetched asynchronously and parsed on a blocking worker so the
//! caller's runtime stays responsive. The store is only touched once the new
//! report has been built in full.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use nwa_common::report::ScanReport;
use nwa_common::{info, success, warn};
use tokio::io::AsyncReadExt;

use crate::parser::{self, ParseError};
use crate::store::ReportStore;

/// Somewhere a report document can be read from.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Human readable origin, used in log messages.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<u8>, ParseError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ParseError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// Standard input, read to the end on fetch.
pub struct StdinSource;

#[async_trait]
impl ReportSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ParseError> {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        Ok(bytes)
    }
}

/// A document already held in memory.
pub struct BytesSource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[async_trait]
impl ReportSource for BytesSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ParseError> {
        Ok(self.bytes.clone())
    }
}

/// Reads, parses and installs a report.
///
/// A failed load is returned to the caller and leaves the store as it was.
pub async fn load(
    store: &ReportStore,
    source: &dyn ReportSource,
) -> Result<Arc<ScanReport>, ParseError> {
    let origin = source.describe();
    info!("Reading scan report from {origin}");

    let report = match fetch_and_parse(source).await {
        Ok(report) => report,
        Err(e) => {
            if store.is_loaded() {
                warn!("Failed to load {origin}, keeping the current report");
            }
            return Err(e);
        }
    };

    let report = store.replace(report);
    let len = report.hosts.len();
    let unit = if len == 1 { "host" } else { "hosts" };
    success!("Loaded {len} {unit} from {origin}");

    Ok(report)
}

async fn fetch_and_parse(source: &dyn ReportSource) -> Result<ScanReport, ParseError> {
    let bytes = source.fetch().await?;

    tokio::task::spawn_blocking(move || parser::parse(&bytes))
        .await
        .map_err(|e| ParseError::IoFailure(io::Error::other(e)))?
}
