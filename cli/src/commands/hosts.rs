use nwa_common::config::Config;
use nwa_common::report::{Host, ScanReport};
use nwa_core::query;

use crate::mprint;
use crate::terminal::{format, print, views};

pub fn hosts(
    report: &ScanReport,
    start: Option<usize>,
    all: bool,
    dead: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let hosts: Vec<&Host> = match dead {
        true => query::dead(report),
        false => query::alive(report),
    };

    let (offset, shown): (usize, &[&Host]) = match all {
        true => (0, hosts.as_slice()),
        false => page(&hosts, start, cfg.page_size),
    };

    if cfg.json {
        return print::json(&views::hosts(shown));
    }

    if shown.is_empty() {
        print::header("zero hosts", cfg.quiet);
        print::no_results(cfg.quiet);
        return Ok(());
    }

    let title: &str = if dead { "dead hosts" } else { "alive hosts" };
    print::header(title, cfg.quiet);
    print_hosts(shown, offset, cfg);

    if cfg.quiet == 0 && shown.len() < hosts.len() {
        mprint!();
        print::print_status(format!(
            "Showing {}-{} of {} hosts",
            offset,
            offset + shown.len() - 1,
            hosts.len()
        ));
    }

    Ok(())
}

/// Prints each host as a small tree, numbered from `offset`.
pub fn print_hosts(hosts: &[&Host], offset: usize, cfg: &Config) {
    for (idx, host) in hosts.iter().enumerate() {
        if cfg.quiet > 1 {
            print::print(&host.address.addr);
            continue;
        }

        print::tree_head(offset + idx, format::host_title(host));
        print::as_tree_one_level(format::host_details(host));

        if idx + 1 != hosts.len() {
            mprint!();
        }
    }
}

/// One page of `size` items beginning at `start`, with the index of its first item.
///
/// Without a start the first page is returned. A start past the last item
/// returns the last full page instead.
fn page<T>(items: &[T], start: Option<usize>, size: usize) -> (usize, &[T]) {
    let len: usize = items.len();
    let start: usize = start.unwrap_or(0);

    if start < len {
        (start, &items[start..len.min(start + size)])
    } else {
        let first: usize = len.saturating_sub(size);
        (first, &items[first..])
    }
}
