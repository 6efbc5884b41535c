//! window-measure - CLI for window field measurements.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use window_measure::measure::{format_inches, resolve_detailed, resolve_simple};
use window_measure::{
    format_size, generate_report, generate_sheet, import_spreadsheet, parse_dimension,
    parse_job_file, resolve_transom, validate_job, write_job_file, ExportConfig, Job,
    MeasureShape, TransomShape, WindowType,
};

/// Normalize window field measurements and produce order documents.
#[derive(Parser, Debug)]
#[command(name = "window-measure")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the final size of one opening
    Size(SizeArgs),

    /// Import a CSV sheet of approximate sizes into a job file
    Import {
        /// Input CSV file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output job file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the imported job as JSON instead of writing it
        #[arg(long)]
        debug: bool,
    },

    /// Validate a job file
    Validate {
        /// Input job file path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate the measurement report for a job
    Report {
        /// Input job file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output report path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a job as a CSV sheet
    Export {
        /// Input job file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Window type (e.g. "Double Hung", "Round")
    #[arg(long = "type")]
    window_type: String,

    /// Width of a round or half-round opening
    #[arg(long)]
    width: Option<String>,

    /// Height of a round or half-round opening
    #[arg(long)]
    height: Option<String>,

    #[arg(long)]
    width_top: Option<String>,

    #[arg(long)]
    width_bottom: Option<String>,

    #[arg(long)]
    height_left: Option<String>,

    #[arg(long)]
    height_right: Option<String>,

    /// Transom height; adds a transom above the opening
    #[arg(long)]
    transom_height: Option<String>,

    /// Transom shape
    #[arg(long, default_value = "Rectangular")]
    transom_shape: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Size(args) => run_size(&args),
        Command::Import {
            input,
            output,
            debug,
        } => run_import(&input, output, debug),
        Command::Validate { input } => run_validate(&input),
        Command::Report { input, output } => {
            let job = load_job(&input)?;
            let config = ExportConfig::for_job(&job);
            let report = generate_report(&job, &config)?;
            let path = output.unwrap_or_else(|| sibling(&input, &config, "txt"));
            write_output(&path, &report)
        }
        Command::Export { input, output } => {
            let job = load_job(&input)?;
            let config = ExportConfig::for_job(&job);
            let sheet = generate_sheet(&job, &config)?;
            let path = output.unwrap_or_else(|| sibling(&input, &config, "csv"));
            write_output(&path, &sheet)
        }
    }
}

fn reading(name: &str, text: Option<&String>) -> Result<Option<f64>> {
    text.map(|t| parse_dimension(t).with_context(|| format!("Invalid --{}", name)))
        .transpose()
}

fn run_size(args: &SizeArgs) -> Result<()> {
    let window_type = WindowType::parse(&args.window_type)
        .ok_or_else(|| anyhow::anyhow!("Window type must not be empty"))?;

    let size = match window_type.shape() {
        MeasureShape::Simple => resolve_simple(
            reading("width", args.width.as_ref())?,
            reading("height", args.height.as_ref())?,
        ),
        MeasureShape::Detailed => {
            let resolution = resolve_detailed(
                reading("width-top", args.width_top.as_ref())?,
                reading("width-bottom", args.width_bottom.as_ref())?,
                reading("height-left", args.height_left.as_ref())?,
                reading("height-right", args.height_right.as_ref())?,
            );
            if let Some(corners) = resolution.and_then(|r| r.corners) {
                println!(
                    "Widths: {} / {}  Heights: {} / {}",
                    format_inches(corners.width_top),
                    format_inches(corners.width_bottom),
                    format_inches(corners.height_left),
                    format_inches(corners.height_right)
                );
            }
            resolution.map(|r| r.final_size)
        }
    };

    let Some(size) = size else {
        anyhow::bail!(
            "Incomplete measurements for {} (all readings must be positive)",
            window_type.name()
        );
    };
    println!("Calculated Final Size: {}", format_size(&size));

    if let Some(height) = &args.transom_height {
        if !window_type.transom_eligible() {
            anyhow::bail!("{} windows do not take a transom", window_type.name());
        }
        let height = reading("transom-height", Some(height))?;
        let transom = resolve_transom(&TransomShape::parse(&args.transom_shape), height)?;
        println!(
            "Transom: {} {}",
            transom.shape,
            format_inches(transom.height)
        );
    }

    Ok(())
}

fn run_import(input: &Path, output: Option<PathBuf>, debug: bool) -> Result<()> {
    info!("Importing: {}", input.display());

    let job = import_spreadsheet(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    info!("Imported {} window(s)", job.windows.len());

    // Debug output
    if debug {
        let json = serde_json::to_string_pretty(&job)?;
        println!("{}", json);
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| input.with_extension("json"));
    write_job_file(&job, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}

fn run_validate(input: &Path) -> Result<()> {
    let job = load_job(input)?;
    let validation = validate_job(&job)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    info!(
        "Validation passed: {} of {} window(s) measured, job {}",
        job.measured_count(),
        job.windows.len(),
        job.status
    );
    Ok(())
}

fn load_job(input: &Path) -> Result<Job> {
    info!("Processing: {}", input.display());
    parse_job_file(input).with_context(|| format!("Failed to parse {}", input.display()))
}

fn sibling(input: &Path, config: &ExportConfig, extension: &str) -> PathBuf {
    input.with_file_name(format!("{}.{}", config.file_stem(), extension))
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}
