//! # Active Report Slot
//!
//! Holds the one report the front end is currently serving.
//!
//! Readers take a snapshot [`Arc`] and keep using it for as long as they like.
//! Loading a new report builds it completely before swapping the slot, so a
//! reader always sees either the old report or the new one in full.

use std::sync::{Arc, PoisonError, RwLock};

use nwa_common::report::ScanReport;
use tracing::debug;

use crate::parser::{self, ParseError};

#[derive(Debug, Default)]
pub struct ReportStore {
    slot: RwLock<Option<Arc<ScanReport>>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the active report, if one has been loaded.
    pub fn current(&self) -> Option<Arc<ScanReport>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    /// Installs `report` as the active report and returns the new snapshot.
    pub fn replace(&self, report: ScanReport) -> Arc<ScanReport> {
        let report = Arc::new(report);
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&report));
        debug!(hosts = report.hosts.len(), "active report replaced");
        report
    }

    /// Parses `bytes` and installs the result.
    ///
    /// On failure the active report is left untouched.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Arc<ScanReport>, ParseError> {
        let report = parser::parse(bytes)?;
        Ok(self.replace(report))
    }
}
