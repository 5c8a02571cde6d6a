//! Command-line interface orchestration for the tsunagi driver.
//!
//! Offers a single `run` command that reads a connections file (first line
//! the site count, then one `p q` pair per line) and merges the listed
//! pairs through the selected disjoint-set implementation.

mod commands;

pub use commands::{
    Algorithm, Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
    run_source,
};
