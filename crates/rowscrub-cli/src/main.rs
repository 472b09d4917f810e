use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use rowscrub_core::process_json;

/// Reads one JSON array from stdin, clears the email field (index 3) if it
/// does not look like an email address, and writes the array to stdout.
#[derive(Parser)]
#[command(
    name = "rowscrub",
    about = "Clear invalid email fields in a pipeline record",
    version,
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

/// Logs go to stderr; stdout carries only the record.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Process exactly one record. Nothing is written unless the record is valid.
fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("Failed to read record from stdin")?;
    debug!(bytes = raw.len(), "record read");

    let record = match process_json(&raw) {
        Ok(record) => record,
        Err(err) => {
            let code = err.code();
            return Err(anyhow::Error::new(err).context(format!("{code}: record rejected")));
        }
    };

    writeln!(output, "{record}").context("Failed to write record to stdout")?;
    output.flush().context("Failed to flush stdout")?;
    Ok(())
}
