//! anchor-disc: Anchor discriminator calculator
//!
//! Prints the namespace, the name, and the 8-byte discriminator of
//! `"{namespace}:{name}"` as raw bytes and as a Rust array literal.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use anchor_disc::logging::init_logging;
use anchor_disc::{Args, CliConfig, Report};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = CliConfig::from_env().with_args(&args);
    init_logging(&config)?;
    debug!(?config, "Resolved configuration");

    let report = Report::new(&args.ns, &args.name);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(config.output, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    if let Some(expected) = args.expect {
        if let Err(err) = report.verify(&expected) {
            warn!(namespace = %report.namespace, name = %report.name, "Expectation failed");
            eprintln!("{}", err);
            return Ok(ExitCode::from(1));
        }
        info!(literal = %report.literal, "Discriminator matches expectation");
    }

    Ok(ExitCode::SUCCESS)
}
