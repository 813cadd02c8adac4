use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use amigo_app::{AppResult, CaseResult, batch_service};
use amigo_tuning::{ControllerType, TuningReport};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amigo-cli")]
#[command(
    about = "AMIGO tuning calculator - PI/PID settings from FOPTD process models",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tune one controller from process gain, time constant and dead time
    Tune {
        /// Process gain (K)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        gain: f64,
        /// Time constant (τ)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        tau: f64,
        /// Time delay (θ)
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        theta: f64,
        /// Controller type: PI or PID
        #[arg(short, long, default_value = "PI")]
        controller: ControllerType,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Tune every case in a YAML or JSON batch file
    Batch {
        /// Path to the batch file
        batch_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Validate batch file syntax and parameters
    Validate {
        /// Path to the batch file
        batch_path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Tune {
            gain,
            tau,
            theta,
            controller,
            format,
        } => cmd_tune(gain, tau, theta, controller, format),
        Commands::Batch { batch_path, format } => cmd_batch(&batch_path, format),
        Commands::Validate { batch_path } => cmd_validate(&batch_path),
    }
}

fn cmd_tune(
    gain: f64,
    tau: f64,
    theta: f64,
    controller: ControllerType,
    format: OutputFormat,
) -> AppResult<()> {
    let report = batch_service::tune_single(gain, tau, theta, controller)?;
    let out = match format {
        OutputFormat::Table => render_report_table(&report),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(&report, format)?,
    };
    print!("{out}");
    Ok(())
}

fn cmd_batch(batch_path: &Path, format: OutputFormat) -> AppResult<()> {
    let batch = batch_service::load_batch(batch_path)?;
    let results = batch_service::run_batch(&batch)?;
    let out = match format {
        OutputFormat::Table => render_batch_table(&batch.name, &results),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(&results, format)?,
    };
    print!("{out}");
    Ok(())
}

fn cmd_validate(batch_path: &Path) -> AppResult<()> {
    println!("Validating batch: {}", batch_path.display());
    let batch = batch_service::load_batch(batch_path)?;
    println!("✓ Batch is valid ({} cases)", batch.cases.len());
    Ok(())
}

fn render_report_table(report: &TuningReport) -> String {
    format!(
        "AMIGO {} settings for {}\n\n{}",
        report.controller,
        report.inputs_summary(),
        report
    )
}

fn render_batch_table(name: &str, results: &[CaseResult]) -> String {
    let mut out = String::new();
    if !name.is_empty() {
        out.push_str(&format!("Batch: {name}\n\n"));
    }
    for result in results {
        out.push_str(&format!("[{}]", result.id));
        if let Some(desc) = &result.description {
            out.push_str(&format!(" {desc}"));
        }
        out.push('\n');
        out.push_str(&render_report_table(&result.report));
        out.push('\n');
    }
    out
}

fn render_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> AppResult<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        _ => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    })
}
