#![warn(clippy::pedantic)]

mod cli;
mod menu;
mod report;

use anyhow::Context as _;
use clap::Parser as _;
use cli::{
    Cli,
    OutputFormat,
};
use dnamatch::{
    Algorithm,
    Sequence,
};
use report::Report;
use std::io::{
    self,
    Write,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_input(what: &str, source: Option<&str>) -> anyhow::Result<Sequence> {
    let source = source.with_context(|| format!("missing {what}"))?;
    Sequence::parse(source).map_err(|error| anyhow::anyhow!("invalid {what}: {error}"))
}

fn search(
    output: &mut impl Write,
    format: OutputFormat,
    algorithms: &[Algorithm],
    sequence: &Sequence,
    pattern: &Sequence,
) -> anyhow::Result<()> {
    let mut reports = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let matches = algorithm
            .search(sequence.as_bytes(), pattern.as_bytes())
            .with_context(|| format!("{} failed", algorithm.name()))?;
        reports.push(Report::new(algorithm, sequence, pattern, matches));
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                write!(output, "{report}")?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<_> = reports.iter().map(Report::to_json).collect();
            serde_json::to_writer_pretty(&mut *output, &json)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let params = cli.hash_params()?;
    tracing::debug!(base = params.base(), modulus = params.modulus(), "hash parameters");

    if cli.interactive {
        return menu::run(io::stdin().lock(), io::stdout().lock(), params);
    }

    let sequence = parse_input("sequence", cli.sequence.as_deref())?;
    let pattern = parse_input("pattern", cli.pattern.as_deref())?;
    let algorithms = cli.algorithm.resolve(params);
    search(
        &mut io::stdout().lock(),
        cli.output,
        &algorithms,
        &sequence,
        &pattern,
    )
}
