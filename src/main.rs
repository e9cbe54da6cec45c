//! aztro_synastry - natal chart reports and relationship compatibility from
//! pre-generated chart JSON files.

use aztro_synastry::{
    analyze_compatibility, render_chart_report, render_compatibility_report, AstrologyError,
    ChartProvider, JsonChartProvider, ReportOptions, Result,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aztro_synastry")]
#[command(about = "Natal chart reports and synastry compatibility scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the report for a single natal chart
    Natal {
        /// Chart JSON file
        #[arg(long)]
        chart: PathBuf,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score the compatibility of two natal charts
    Compare {
        /// First person's chart JSON file
        #[arg(long)]
        chart1: PathBuf,

        /// Second person's chart JSON file
        #[arg(long)]
        chart2: PathBuf,

        /// Also write the output to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Aspects listed in the text report
        #[arg(long, env = "AZTRO_ASPECT_LIMIT", default_value_t = 10)]
        aspect_limit: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    println!("{}", text);
    if let Some(path) = output {
        fs::write(path, text).map_err(|source| AstrologyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let provider = JsonChartProvider::new();

    match cli.command {
        Commands::Natal { chart, output } => {
            let chart = provider.chart(&chart)?;
            emit(&render_chart_report(&chart), output.as_deref())
        }
        Commands::Compare {
            chart1,
            chart2,
            output,
            format,
            aspect_limit,
        } => {
            let chart1 = provider.chart(&chart1)?;
            let chart2 = provider.chart(&chart2)?;
            let result = analyze_compatibility(&chart1, &chart2);

            let text = match format {
                Format::Text => {
                    render_compatibility_report(&result, &ReportOptions { aspect_limit })
                }
                Format::Json => serde_json::to_string_pretty(&result)?,
            };
            emit(&text, output.as_deref())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
