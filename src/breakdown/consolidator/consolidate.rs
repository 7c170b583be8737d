use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::breakdown::consolidator::aggregate::aggregate_with;
use crate::breakdown::consolidator::error::Result;
use crate::breakdown::consolidator::format::{CurrencyFormat, render_csv, summarize};
use crate::breakdown::consolidator::io::{csv_read, summary_write};
use crate::breakdown::consolidator::model::{RawTable, SummaryTable};
use crate::breakdown::consolidator::numeric::NumericCellParser;

/// File name the result is written to when no other output is requested.
pub const OUTPUT_CSV_NAME: &str = "consolidated.csv";

/// Usage text shown when the tool runs without input files.
pub const HELP_MESSAGE: &str = "
The breakdown consolidator must be run with at least one .csv (comma separated values) file.
Pass the path of every CSV file to consolidate. For example:
accounts/assets.csv accounts/expenses.csv receipts.csv";

/// Serialisation used for the consolidated output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Settings for a file-level consolidation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidateOptions {
    pub output: PathBuf,
    pub currency: CurrencyFormat,
    pub format: OutputFormat,
}

impl Default for ConsolidateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(OUTPUT_CSV_NAME),
            currency: CurrencyFormat::default(),
            format: OutputFormat::Csv,
        }
    }
}

/// Consolidates in-memory tables into the rendered three-row CSV text.
pub fn consolidate(tables: &[RawTable], currency: &CurrencyFormat) -> Result<String> {
    let summary = consolidate_summary(tables, currency)?;
    Ok(render_csv(&summary, currency))
}

/// Consolidates in-memory tables into the structured summary.
pub fn consolidate_summary(tables: &[RawTable], currency: &CurrencyFormat) -> Result<SummaryTable> {
    let parser = NumericCellParser::new(currency.symbol)?;
    let accumulator = aggregate_with(tables, &parser)?;
    Ok(summarize(&accumulator))
}

/// Reads every input file, consolidates them, and writes the result.
///
/// Nothing is written unless every input loads and aggregates cleanly.
#[instrument(
    level = "info",
    skip_all,
    fields(inputs = paths.len(), output = %options.output.display(), format = ?options.format)
)]
pub fn consolidate_files<P: AsRef<Path>>(paths: &[P], options: &ConsolidateOptions) -> Result<SummaryTable> {
    let tables = csv_read::read_tables(paths)?;
    debug!(
        line_count = tables.iter().map(|table| table.lines.len()).sum::<usize>(),
        "loaded input tables"
    );

    let summary = consolidate_summary(&tables, &options.currency)?;
    info!(label_count = summary.columns.len(), "consolidated breakdown tables");

    match options.format {
        OutputFormat::Csv => summary_write::write_csv(&options.output, &summary, &options.currency)?,
        OutputFormat::Json => summary_write::write_json(&options.output, &summary)?,
    }
    Ok(summary)
}
