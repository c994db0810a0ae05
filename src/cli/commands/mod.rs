//! Command implementations for the sightings CLI
//!
//! Each subcommand lives in its own module:
//! - `query`: one filter, printed as a summary, JSON bundle or figures
//! - `interactive`: filters streamed from stdin, one per line
//! - `stats`: load statistics for the configured source

pub mod interactive;
pub mod query;
pub mod shared;
pub mod stats;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the selected subcommand
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Query(query_args) => query::run_query(&args.global, &query_args),
        Commands::Interactive(interactive_args) => {
            interactive::run_interactive(&args.global, &interactive_args)
        }
        Commands::Stats(stats_args) => stats::run_stats(&args.global, &stats_args),
    }
}
