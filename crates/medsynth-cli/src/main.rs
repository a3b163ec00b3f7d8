use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use medsynth_generate::{EngineError, GenerateOptions, GenerationEngine};

#[derive(Debug, Error)]
enum CliError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("{count} table(s) failed: {tables}")]
    TablesFailed { count: usize, tables: String },
}

#[derive(Parser, Debug)]
#[command(name = "medsynth", version, about = "Hospital operational dataset synthesizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the hospital dataset as one CSV file per table.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Base row count; every table's target derives from it.
    #[arg(long, default_value_t = 10_000)]
    rows: u64,
    /// Output directory for table files and the run report.
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Restrict generation to the named tables (repeatable).
    #[arg(long, value_name = "TABLE")]
    only: Vec<String>,
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = GenerateOptions {
        out_dir: args.out,
        base_rows: args.rows,
        seed: args.seed,
        only: args.only,
    };

    let result = GenerationEngine::new(options).run()?;
    if result.report.failures.is_empty() {
        return Ok(());
    }

    let tables = result
        .report
        .failures
        .iter()
        .map(|failure| failure.table.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    for failure in &result.report.failures {
        error!(table = %failure.table, error = %failure.error, "table not produced");
    }
    Err(CliError::TablesFailed {
        count: result.report.failures.len(),
        tables,
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
