//! `taqc-gen`: write the `ToQueryParams` implementation of a struct.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use taqc_gen::{DEFAULT_CRATE_PATH, GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taqc-gen")]
#[command(about = "Generate ToQueryParams implementations for taqc-tagged structs")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Name of the struct to generate code for
    #[arg(long = "type", value_name = "NAME", required_unless_present = "version")]
    type_name: Option<String>,

    /// Output file (default: <dir>/<type>_gen.rs)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path of the taqc crate in generated code
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CRATE_PATH)]
    crate_path: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print version information as JSON
    #[arg(long)]
    version: bool,

    /// Files or directories to scan
    #[arg(value_name = "INPUT", default_value = ".")]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    revision: &'static str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[error] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.version {
        let info = VersionInfo {
            version: env!("CARGO_PKG_VERSION"),
            revision: option_env!("TAQC_GEN_REVISION").unwrap_or_default(),
        };
        println!("{}", serde_json::to_string(&info)?);
        return Ok(());
    }

    let type_name = cli.type_name.context("missing --type")?;
    let mut builder = GeneratorConfig::builder(type_name)
        .inputs(cli.inputs)
        .crate_path(cli.crate_path)
        .command_line(std::env::args().skip(1));
    if let Some(output) = cli.output {
        builder = builder.output(output);
    }

    let config = builder.build();
    generate(&config)
        .with_context(|| format!("failed to generate code for `{}`", config.type_name))?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
