use nwa_common::config::Config;
use nwa_common::report::{Host, ScanReport};
use nwa_core::search::{self, SearchKind};

use crate::commands::hosts::print_hosts;
use crate::terminal::{print, views};

pub fn search(
    report: &ScanReport,
    kind: SearchKind,
    query: &str,
    unique: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let hosts: Vec<&Host> = search::search(report, kind, query, unique);

    if cfg.json {
        return print::json(&views::hosts(&hosts));
    }

    print::header(&format!("{kind} matching '{query}'"), cfg.quiet);

    if hosts.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print_hosts(&hosts, 0, cfg);
    Ok(())
}
