mod commands;
mod terminal;

use commands::{CommandLine, Commands, host, hosts, list, search, summary, trace};
use nwa_core::store::ReportStore;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    print::banner(&cfg);

    let store = ReportStore::new();
    let report = commands::load_report(&store, &commands.file, &cfg).await?;

    match commands.command {
        Commands::Summary => summary::summary(&report, &cfg),
        Commands::Hosts { start, all, dead } => hosts::hosts(&report, start, all, dead, &cfg),
        Commands::Host { addr } => host::host(&report, &addr, &cfg),
        Commands::Trace { addr } => trace::trace(&report, &addr, &cfg),
        Commands::List { kind } => list::list(&report, kind, &cfg),
        Commands::Search { kind, query, unique } => {
            search::search(&report, kind, &query, unique, &cfg)
        }
    }
}
