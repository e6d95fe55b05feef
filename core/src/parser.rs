//! # Report Parser
//!
//! Deserializes a scan report document into the typed model.
//!
//! Parsing is all-or-nothing: a document that is not well-formed markup yields
//! [`ParseError::Malformed`] and no partial report. Well-formed documents with
//! missing or unexpected fields always parse; absent values become empty.

use std::io::{self, Read};
use std::path::Path;

use nwa_common::report::ScanReport;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The byte stream is not well-formed markup.
    #[error("malformed scan report: {0}")]
    Malformed(String),
    /// The underlying byte source could not be read.
    #[error("failed to read scan report: {0}")]
    IoFailure(#[from] io::Error),
}

impl From<quick_xml::DeError> for ParseError {
    fn from(err: quick_xml::DeError) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

/// Parses a complete report held in memory.
pub fn parse(bytes: &[u8]) -> Result<ScanReport, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::Malformed(format!("invalid UTF-8: {e}")))?;
    parse_str(text)
}

pub fn parse_str(text: &str) -> Result<ScanReport, ParseError> {
    let report: ScanReport = quick_xml::de::from_str(text)?;
    debug!(hosts = report.hosts.len(), "parsed scan report");
    Ok(report)
}

pub fn parse_reader<R: Read>(mut reader: R) -> Result<ScanReport, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&bytes)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ScanReport, ParseError> {
    let bytes = std::fs::read(path.as_ref())?;
    parse(&bytes)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
