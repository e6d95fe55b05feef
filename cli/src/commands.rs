pub mod host;
pub mod hosts;
pub mod list;
pub mod search;
pub mod summary;
pub mod trace;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use nwa_common::config::{Config, DEFAULT_PAGE_SIZE};
use nwa_common::report::ScanReport;
use nwa_core::census::CensusKind;
use nwa_core::loader::{self, FileSource, ReportSource, StdinSource};
use nwa_core::search::SearchKind;
use nwa_core::store::ReportStore;

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "nwa")]
#[command(about = "Browse the hosts, ports and services of a network scan report.")]
pub struct CommandLine {
    /// Scan report (XML) to load, or '-' to read it from stdin
    #[arg(short, long)]
    pub file: PathBuf,

    /// Reduce output, repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Hosts per page when listing
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show scan metadata and host counts
    #[command(alias = "s")]
    Summary,
    /// List alive hosts, one page at a time
    #[command(alias = "ls")]
    Hosts {
        /// Index of the first host to show
        #[arg(long)]
        start: Option<usize>,
        /// Show every host instead of a single page
        #[arg(long)]
        all: bool,
        /// Show hosts that were down instead
        #[arg(long)]
        dead: bool,
    },
    /// Show everything known about one alive host
    #[command(alias = "h")]
    Host { addr: String },
    /// Show the traceroute path to one alive host
    #[command(alias = "t")]
    Trace { addr: String },
    /// Count alive hosts per open port or per OS guess
    #[command(alias = "l")]
    List { kind: CensusKind },
    /// Find alive hosts by os, service, banner or port
    #[command(alias = "f")]
    Search {
        kind: SearchKind,
        query: String,
        /// List each matching host once
        #[arg(short, long)]
        unique: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            json: self.json,
            page_size: self.page_size.max(1),
        }
    }
}

/// Loads the report behind `path` into `store` while a spinner runs.
pub async fn load_report(
    store: &ReportStore,
    path: &Path,
    cfg: &Config,
) -> anyhow::Result<Arc<ScanReport>> {
    let source: Box<dyn ReportSource> = if path.as_os_str() == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    };

    spinner::start(format!("Processing {}", source.describe()), cfg);
    let result = loader::load(store, source.as_ref()).await;
    spinner::stop();

    result.with_context(|| format!("could not load scan report {}", path.display()))
}
