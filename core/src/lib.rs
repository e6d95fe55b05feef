//! # NWA Core
//!
//! Ingestion and query engine for scan reports.
//!
//! * **[`parser`]**: turns raw report bytes into a [`ScanReport`](nwa_common::report::ScanReport).
//! * **[`query`]**: liveness partition, open ports, OS guess and host lookup.
//! * **[`census`]**: grouped counts of open ports and OS guesses.
//! * **[`search`]**: predicate searches over the alive hosts.
//! * **[`trace`]**: hop graph of a host's traceroute.
//! * **[`store`]** / **[`loader`]**: the single "currently active report" slot
//!   and the asynchronous path that fills it.
//!
//! Every query function is pure and takes the report explicitly, so any number
//! of readers may share one report without locking.

pub mod census;
pub mod loader;
pub mod parser;
pub mod query;
pub mod search;
pub mod store;
pub mod trace;

pub use parser::ParseError;
