//! Integration tests running the engine against recorded scan reports.

#[cfg(test)]
mod report;
