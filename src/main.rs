use std::path::PathBuf;

use breakdown_consolidator::consolidate::{
    self, ConsolidateOptions, HELP_MESSAGE, OUTPUT_CSV_NAME, OutputFormat,
};
use breakdown_consolidator::format::{CurrencyFormat, NegativeStyle};
use breakdown_consolidator::numeric;
use breakdown_consolidator::{Result, ToolError};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let wants_help = cli
        .paths
        .first()
        .is_none_or(|first| first.to_string_lossy().eq_ignore_ascii_case("help"));
    if wants_help {
        println!("{HELP_MESSAGE}");
        return Ok(());
    }

    let options = cli.options();
    consolidate::consolidate_files(&cli.paths, &options)?;
    println!("Consolidated successfully to {}.", options.output.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Consolidate CSV breakdowns into per-label totals and averages."
)]
struct Cli {
    /// Breakdown CSV files to consolidate. Pass none, or `help`, for usage.
    paths: Vec<PathBuf>,

    /// Output file path.
    #[arg(long, default_value = OUTPUT_CSV_NAME)]
    output: PathBuf,

    /// Currency symbol accepted in input cells and used for output amounts.
    #[arg(long, default_value_t = '$', value_parser = parse_currency_symbol)]
    currency_symbol: char,

    /// How negative amounts are written.
    #[arg(long, value_enum, default_value_t = NegativeStyleKind::Minus)]
    negative_style: NegativeStyleKind,

    /// Output representation.
    #[arg(long, value_enum, default_value_t = OutputFormatKind::Csv)]
    format: OutputFormatKind,
}

impl Cli {
    fn options(&self) -> ConsolidateOptions {
        ConsolidateOptions {
            output: self.output.clone(),
            currency: CurrencyFormat {
                symbol: self.currency_symbol,
                negative_style: self.negative_style.into(),
            },
            format: self.format.into(),
        }
    }
}

fn parse_currency_symbol(raw: &str) -> std::result::Result<char, String> {
    let mut chars = raw.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single character, found '{raw}'"));
    };
    numeric::validate_currency_symbol(symbol).map_err(|error| error.to_string())
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum NegativeStyleKind {
    Minus,
    Parentheses,
}

impl From<NegativeStyleKind> for NegativeStyle {
    fn from(kind: NegativeStyleKind) -> Self {
        match kind {
            NegativeStyleKind::Minus => NegativeStyle::Minus,
            NegativeStyleKind::Parentheses => NegativeStyle::Parentheses,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormatKind {
    Csv,
    Json,
}

impl From<OutputFormatKind> for OutputFormat {
    fn from(kind: OutputFormatKind) -> Self {
        match kind {
            OutputFormatKind::Csv => OutputFormat::Csv,
            OutputFormatKind::Json => OutputFormat::Json,
        }
    }
}
