//! Plain text summaries of a finished search.

use std::fmt::Display;
use std::io::{self, Write};

use searcher::{Outcome, SearchReport, SearchState};

/// Write a summary of a search: the path found, if any, followed
/// by the frontier and expansion counters.
pub fn write_summary<W, S>(writer: &mut W, report: &SearchReport<S>) -> io::Result<()>
where
    W: Write,
    S: SearchState + Display,
    S::Move: Display,
{
    match &report.outcome {
        Outcome::Solved(path) => {
            writeln!(
                writer,
                "found solution of length {}, cost {}",
                path.len(),
                path.cost()
            )?;
            for step in path {
                writeln!(writer, "  {:5} {}", step.label, step.state)?;
            }
        }
        Outcome::Exhausted => writeln!(writer, "no solution found")?,
        Outcome::Truncated(expanded) => writeln!(
            writer,
            "no solution found (search truncated after {} expansions)",
            expanded
        )?,
    }

    writeln!(
        writer,
        "{} states placed on frontier, {} states expanded",
        report.frontier_count, report.expanded_count
    )
}
