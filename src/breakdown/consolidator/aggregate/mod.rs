use tracing::{debug, info, instrument, warn};

use crate::breakdown::consolidator::error::ConsolidateError;
use crate::breakdown::consolidator::model::{LabelAccumulator, RawTable};
use crate::breakdown::consolidator::numeric::{NumericCellParser, ParsedValue};
use crate::breakdown::consolidator::tokenize::tokenize;

/// Merges `tables` into per-label sums and counts using the default `$`
/// currency symbol.
pub fn aggregate(tables: &[RawTable]) -> Result<LabelAccumulator, ConsolidateError> {
    aggregate_with(tables, &NumericCellParser::default())
}

/// Merges `tables` into per-label sums and counts.
///
/// Labels are identified by their exact header text, so columns from tables
/// with different shapes land in the same bucket whenever their headers match.
/// Blank and zero cells are validated but contribute neither to the sum nor to
/// the count. The first malformed header, row, or cell aborts the whole call.
#[instrument(level = "debug", skip_all, fields(table_count = tables.len()))]
pub fn aggregate_with(
    tables: &[RawTable],
    parser: &NumericCellParser,
) -> Result<LabelAccumulator, ConsolidateError> {
    let mut accumulator = LabelAccumulator::new();

    for (table_index, table) in tables.iter().enumerate() {
        let Some(header_line) = table.header() else {
            warn!(table = table_index, "skipping table without a header line");
            continue;
        };

        let header = tokenize(header_line);
        let mut columns = Vec::with_capacity(header.len());
        for label in &header {
            if parser.classify(label).is_numeric() {
                return Err(ConsolidateError::HeaderIsNumeric {
                    label: label.clone(),
                    table: table_index,
                    line: header_line.to_string(),
                });
            }
            columns.push(accumulator.ensure_label(label));
        }

        let mut row_count = 0usize;
        for line in table.rows() {
            ingest_row(&mut accumulator, parser, &columns, line, table_index)?;
            row_count += 1;
        }

        debug!(
            table = table_index,
            columns = columns.len(),
            rows = row_count,
            "table aggregated"
        );
    }

    info!(label_count = accumulator.len(), "tables consolidated");
    Ok(accumulator)
}

fn ingest_row(
    accumulator: &mut LabelAccumulator,
    parser: &NumericCellParser,
    columns: &[usize],
    line: &str,
    table_index: usize,
) -> Result<(), ConsolidateError> {
    let fields = tokenize(line);
    if fields.len() > columns.len() {
        return Err(ConsolidateError::ValueWithoutHeader {
            table: table_index,
            line: line.to_string(),
            fields: fields.len(),
            columns: columns.len(),
        });
    }

    for (&column, field) in columns.iter().zip(&fields) {
        match parser.classify(field) {
            ParsedValue::Invalid => {
                return Err(ConsolidateError::InvalidValue {
                    value: field.clone(),
                    table: table_index,
                    line: line.to_string(),
                });
            }
            ParsedValue::Numeric(value) if value != 0.0 => accumulator.record(column, value),
            ParsedValue::Numeric(_) | ParsedValue::Empty => {}
        }
    }

    Ok(())
}
