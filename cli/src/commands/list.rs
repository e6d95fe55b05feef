use colored::*;
use nwa_common::config::Config;
use nwa_common::report::ScanReport;
use nwa_core::census::{self, CensusEntry, CensusKind};

use crate::terminal::{colors, print};

pub fn list(report: &ScanReport, kind: CensusKind, cfg: &Config) -> anyhow::Result<()> {
    let entries: Vec<CensusEntry> = census::census(report, kind);

    if cfg.json {
        return print::json(&entries);
    }

    let title: &str = match kind {
        CensusKind::Port => "open ports",
        CensusKind::Os => "operating systems",
    };
    print::header(title, cfg.quiet);

    if entries.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    for entry in &entries {
        let name: &str = match entry.name.as_str() {
            "" => "unknown",
            name => name,
        };
        let unit: &str = if entry.count == 1 { "host" } else { "hosts" };
        let count: ColoredString = format!("{} {unit}", entry.count).color(colors::ACCENT);
        print::aligned_line(name, count);
    }

    Ok(())
}
