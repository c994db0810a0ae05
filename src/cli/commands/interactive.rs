//! Line-oriented interactive session
//!
//! Each stdin line is one filter string, as if typed into a search box.
//! Queries share the engine cache, so repeating a filter is cheap.

use super::shared::{format_summary, initialize};
use crate::QueryEngine;
use crate::cli::args::{GlobalArgs, InteractiveArgs};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run queries from stdin until end of input
pub fn run_interactive(global: &GlobalArgs, args: &InteractiveArgs) -> Result<()> {
    let (engine, _stats) = initialize(global)?;

    if !global.quiet {
        eprintln!("Enter a filter per line (empty line matches everything, Ctrl-D to exit)");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let queries = run_session(&engine, stdin.lock(), stdout.lock(), args.json)?;

    let cache = engine.cache_stats();
    info!(
        "Answered {} queries ({} cache hits, {} misses)",
        queries, cache.hits, cache.misses
    );
    Ok(())
}

/// Answer every line of `input`, writing one result per line to `output`
///
/// Returns the number of queries answered.
pub fn run_session<R, W>(engine: &QueryEngine, input: R, mut output: W, json: bool) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;

    for line in input.lines() {
        let line = line.context("Failed to read filter from input")?;
        let filter_text = line.trim_end_matches('\r');
        let bundle = engine.query_views(filter_text);

        if json {
            let rendered =
                serde_json::to_string(&bundle).context("Failed to serialize query result")?;
            writeln!(output, "{}", rendered)?;
        } else {
            write!(output, "{}", format_summary(filter_text, &bundle))?;
        }
        output.flush()?;
        answered += 1;
    }

    Ok(answered)
}
