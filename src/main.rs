mod cli;
mod logging;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use shorthand_dates::{ExpandedSchedule, Year, expand, split_tokens};

use crate::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> Result<()> {
    let year = resolve_year(cli.year)?;
    let tokens = split_tokens(&cli.dates);
    tracing::info!(%year, tokens = tokens.len(), "expanding dates");

    let schedule = expand(tokens, year)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_schedule(&mut out, &schedule, cli.format)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// The year given on the command line, or the local calendar year read once.
fn resolve_year(requested: Option<u16>) -> Result<Year> {
    let value = match requested {
        Some(value) => value,
        None => {
            let today = chrono::Local::now().year();
            u16::try_from(today).with_context(|| format!("current year {today} is out of range"))?
        }
    };
    Year::new(value).with_context(|| format!("cannot resolve dates against year {value}"))
}

fn write_schedule(out: &mut impl Write, schedule: &ExpandedSchedule, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for date in schedule.dates() {
                writeln!(out, "{date}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, schedule).context("failed to encode schedule")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
