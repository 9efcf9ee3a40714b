//! CLI entry point for cityperm.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `cityperm-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use cityperm_app::{
    CheckInput, OutputFormat, PermitInput, PermitOutput, parse_report_json, render_report,
    report_schema_json, run_check, run_permit,
};
use cityperm_settings::Overrides;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cityperm",
    version,
    about = "Evaluate which locations each distributor may serve"
)]
struct Cli {
    /// Path to cityperm config TOML.
    #[arg(long, global = true, default_value = "cityperm.toml")]
    config: Utf8PathBuf,

    /// Override the distributor preset (sample|none).
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Evaluate on a dedicated pool with this many threads.
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every distributor against a location catalog.
    Check {
        /// Location catalog CSV (code, province code, country code, city, province, country).
        #[arg(long)]
        catalog: Utf8PathBuf,

        /// Output format (text, json, or md).
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report here instead of stdout.
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Decide a single location code for one distributor.
    Permit {
        /// Distributor name as configured.
        #[arg(long)]
        distributor: String,

        /// Location code, e.g. CHENNAI-TAMILNADU-IN.
        code: String,
    },

    /// Re-render a JSON report written by `check --format json`.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format (text, json, or md).
        #[arg(long, default_value = "md")]
        format: String,

        /// Write the rendered report here instead of stdout.
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Print the JSON schema of the report envelope.
    Schema,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Check {
            catalog,
            format,
            out,
        } => cmd_check(&cli, catalog, format, out.as_deref()),
        Commands::Permit { distributor, code } => cmd_permit(&cli, distributor, code),
        Commands::Render {
            report,
            format,
            out,
        } => cmd_render(report, format, out.as_deref()),
        Commands::Schema => cmd_schema(),
    };

    // process::exit skips destructors, so flush buffered report output first.
    let _ = std::io::stdout().flush();

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("cityperm error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        preset: cli.preset.clone(),
        threads: cli.threads,
    }
}

/// Missing config file is allowed (defaults apply); unreadable is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(path = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn cmd_check(
    cli: &Cli,
    catalog: &Utf8Path,
    format: &str,
    out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let format: OutputFormat = format.parse()?;
    let config_text = read_config(&cli.config)?;

    let output = run_check(CheckInput {
        catalog_path: catalog,
        config_text: &config_text,
        overrides: overrides(cli),
    })?;

    let rendered = render_report(&output.report, format)?;
    emit(out, &rendered)?;
    Ok(0)
}

fn cmd_render(report: &Utf8Path, format: &str, out: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let format: OutputFormat = format.parse()?;
    let report_text = std::fs::read_to_string(report)
        .with_context(|| format!("read report: {}", report))?;
    let report = parse_report_json(&report_text)?;

    let rendered = render_report(&report, format)?;
    emit(out, &rendered)?;
    Ok(0)
}

fn cmd_permit(cli: &Cli, distributor: &str, code: &str) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;

    let output = run_permit(PermitInput {
        config_text: &config_text,
        overrides: overrides(cli),
        distributor,
        code,
    })?;

    match output {
        PermitOutput::Decided(permitted) => {
            println!("{}", permitted);
            Ok(0)
        }
        PermitOutput::UnknownDistributor { available } => {
            eprintln!(
                "unknown distributor: {distributor}\navailable: {}",
                available.join(", ")
            );
            Ok(1)
        }
    }
}

fn cmd_schema() -> anyhow::Result<i32> {
    println!("{}", report_schema_json()?);
    Ok(0)
}

fn emit(out: Option<&Utf8Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => write_text_file(path, rendered).context("write report")?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
