use std::io::{BufRead, Write};
use std::net::IpAddr;

use thiserror::Error;

use crate::table::LpmTable;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("query stream I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized address {line:?}: {source}")]
    Address {
        line: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Answer each address on `input` with one line on `output`: the tag of
/// the longest covering prefix, or `-` when nothing covers it. Output
/// order follows input order; empty lines are skipped.
pub fn run<R: BufRead, W: Write>(
    table: &LpmTable,
    input: R,
    mut output: W,
) -> Result<(), QueryError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let addr: IpAddr = line.parse().map_err(|source| QueryError::Address {
            line: line.to_string(),
            source,
        })?;
        match table.lookup(addr) {
            Some(tag) => writeln!(output, "{}", tag)?,
            None => writeln!(output, "-")?,
        }
    }
    output.flush()?;
    Ok(())
}
