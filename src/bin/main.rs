//! Spreadsheet to JSON-LD CLI
//!
//! Command-line tool converting CSV and spreadsheet files into JSON-LD.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use sheet_jsonld::batch::DEFAULT_OUTPUT_DIR;
use sheet_jsonld::logging::{init_logging, LogConfig};
use sheet_jsonld::{
    convert_batch, discover_inputs, BatchOptions, ConvertError, FileLoader, TracingSink,
    DEFAULT_BASE_URI,
};

#[derive(Parser)]
#[command(name = "sheet-jsonld")]
#[command(about = "Convert spreadsheet tables into schema.org JSON-LD documents")]
#[command(version)]
struct Cli {
    /// Table files (.csv, .xlsx, .xls, .ods, ...) or folders containing them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output folder (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Namespace bound to the `ex:` prefix
    #[arg(long, default_value = DEFAULT_BASE_URI)]
    base_uri: String,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Expand folders into the table files they contain
fn collect_inputs(sources: &[PathBuf]) -> Result<Vec<PathBuf>, ConvertError> {
    let mut inputs = Vec::new();
    for source in sources {
        if source.is_dir() {
            let found = discover_inputs(source)?;
            if found.is_empty() {
                tracing::warn!("No table files found in {}", source.display());
            }
            inputs.extend(found);
        } else {
            inputs.push(source.clone());
        }
    }
    Ok(inputs)
}

fn run(cli: Cli) -> Result<bool, ConvertError> {
    let inputs = collect_inputs(&cli.inputs)?;
    if inputs.is_empty() {
        error!("No input files to convert");
        return Ok(false);
    }

    let options = BatchOptions {
        base_uri: cli.base_uri,
        output_dir: cli.output,
        pretty: !cli.compact,
        ..Default::default()
    };

    let summary = convert_batch(&inputs, &FileLoader, &options, &TracingSink);
    Ok(summary.all_succeeded())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
