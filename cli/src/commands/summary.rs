use colored::*;
use nwa_common::config::Config;
use nwa_common::report::ScanReport;
use nwa_core::query;
use serde::Serialize;

use crate::terminal::{colors, print};

#[derive(Serialize)]
struct SummaryView<'a> {
    scanner: &'a str,
    version: &'a str,
    args: &'a str,
    started: &'a str,
    total: usize,
    alive: usize,
    dead: usize,
    elapsed: &'a str,
    summary: &'a str,
}

pub fn summary(report: &ScanReport, cfg: &Config) -> anyhow::Result<()> {
    let alive: usize = query::alive(report).len();
    let dead: usize = query::dead(report).len();

    if cfg.json {
        return print::json(&SummaryView {
            scanner: &report.run.scanner,
            version: &report.run.version,
            args: &report.run.args,
            started: &report.run.start_str,
            total: report.hosts.len(),
            alive,
            dead,
            elapsed: &report.stats.finished.elapsed,
            summary: &report.stats.finished.summary,
        });
    }

    print::header("scan summary", cfg.quiet);
    print::aligned_line("Scanner", format!("{} {}", report.run.scanner, report.run.version));
    print::aligned_line("Command", report.run.args.as_str());
    print::aligned_line("Started", report.run.start_str.as_str());

    for info in &report.scan_info {
        let detail: String = format!("{} ({} services)", info.kind, info.num_services);
        print::aligned_line(&format!("Scan {}", info.protocol), detail);
    }

    print::aligned_line("Hosts", report.hosts.len().to_string());
    print::aligned_line("Alive", alive.to_string().green().bold());
    print::aligned_line("Dead", dead.to_string().red());

    let finished = &report.stats.finished;
    if !finished.elapsed.is_empty() {
        print::aligned_line("Elapsed", format!("{}s", finished.elapsed));
    }

    if cfg.quiet == 0 && !finished.summary.is_empty() {
        print::fat_separator();
        print::centerln(&format!("{}", finished.summary.color(colors::TEXT_DEFAULT)));
    }

    Ok(())
}
