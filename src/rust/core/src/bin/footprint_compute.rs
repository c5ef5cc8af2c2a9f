// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
//! footprint_compute: CLI for the full FootprintKernel pipeline
//!
//! Reads an input snapshot (the same JSON the web form produces) and prints
//! the report: per-phase breakdowns, total, label, equivalences, and events.
//!
//! Usage:
//!   echo '{"hosting":{"annualVisits":100000}}' | footprint_compute
//!   footprint_compute --json '{"training":{"selectedModel":"BLOOM"}}' --pretty
//!   footprint_compute --input snapshot.json --coefficients overrides.json --summary
//!
//! Logs go to stderr (RUST_LOG, default "warn"); stdout carries only the report.

use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ai_footprint_core::coefficients::Coefficients;
use ai_footprint_core::error::{FootprintError, Result};
use ai_footprint_core::footprint_kernel::FootprintKernel;
use ai_footprint_core::input::FootprintInput;
use ai_footprint_core::reference::ReferenceData;
use ai_footprint_core::report::narrative;

/// Yearly CO2e footprint of a generative-AI application
#[derive(Parser)]
#[command(name = "footprint_compute")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input snapshot as a JSON string
    #[arg(long, conflicts_with = "input")]
    json: Option<String>,

    /// Input snapshot file (stdin when neither this nor --json is given)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Partial coefficient override (JSON)
    #[arg(short, long, value_name = "FILE")]
    coefficients: Option<PathBuf>,

    /// Foundation-model table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    models: Option<PathBuf>,

    /// Datacenter table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    datacenters: Option<PathBuf>,

    /// Device table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    devices: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Print the plain-language summary instead of JSON
    #[arg(long)]
    summary: bool,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| FootprintError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(json) = &cli.json {
        return Ok(json.clone());
    }
    if let Some(path) = &cli.input {
        return read_file(path);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|source| FootprintError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buffer)
}

fn load_reference(cli: &Cli) -> Result<ReferenceData> {
    if cli.models.is_none() && cli.datacenters.is_none() && cli.devices.is_none() {
        return ReferenceData::builtin();
    }
    let builtin = ReferenceData::builtin()?;
    let table = |path: &Option<PathBuf>, fallback: String| -> Result<String> {
        match path {
            Some(p) => read_file(p),
            None => Ok(fallback),
        }
    };
    let models = table(&cli.models, to_json(builtin.models())?)?;
    let datacenters = table(&cli.datacenters, to_json(builtin.datacenters())?)?;
    let devices = table(&cli.devices, to_json(builtin.devices())?)?;
    ReferenceData::from_json(&models, &datacenters, &devices)
}

fn to_json<T: serde::Serialize + ?Sized>(rows: &T) -> Result<String> {
    serde_json::to_string(rows).map_err(FootprintError::ReportSerialize)
}

fn run(cli: &Cli) -> Result<String> {
    let input = FootprintInput::from_json(&read_input(cli)?)?;
    let coefficients = match &cli.coefficients {
        Some(path) => Coefficients::from_json(&read_file(path)?)?,
        None => Coefficients::default(),
    };
    let reference = load_reference(cli)?;
    debug!(
        coefficients = %coefficients.version,
        models = reference.models().len(),
        datacenters = reference.datacenters().len(),
        devices = reference.devices().len(),
        "inputs loaded"
    );

    let report = FootprintKernel::compute(&input, &reference, &coefficients);
    if cli.summary {
        Ok(narrative(&report))
    } else {
        report.to_json(cli.pretty)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
