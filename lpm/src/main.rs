// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lpm::query;
use lpm::table::LpmTable;

#[derive(Parser)]
#[command(author, version, about = "Longest-prefix-match lookups over a subnet table", long_about = None)]
struct Arg {
    #[arg(short, long, help = "Input file containing subnets and tags")]
    input: PathBuf,
}

fn parse_args() -> Arg {
    match Arg::try_parse() {
        Ok(arg) => arg,
        Err(err) => {
            // usage and help go to stdout, whatever the error
            print!("{}", err.render());
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    }
}

fn tracing_set() {
    // stdout carries the query answers; logging stays on stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let arg = parse_args();
    tracing_set();

    let table = LpmTable::load_path(&arg.input)
        .with_context(|| format!("failed to load prefix table {}", arg.input.display()))?;
    info!(
        "loaded {} IPv4 and {} IPv6 prefixes from {}",
        table.len_v4(),
        table.len_v6(),
        arg.input.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    query::run(&table, stdin.lock(), io::BufWriter::new(stdout.lock()))?;

    Ok(())
}
