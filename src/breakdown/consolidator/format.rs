use serde::{Deserialize, Serialize};

use crate::breakdown::consolidator::model::{LabelAccumulator, SummaryTable};
use crate::breakdown::consolidator::numeric::DEFAULT_CURRENCY_SYMBOL;
use crate::breakdown::consolidator::tokenize::escape_field;

/// Line terminator used between output rows.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator used between output rows.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Leftmost cell of the totals row.
pub const TOTAL_ROW_LABEL: &str = "total";
/// Leftmost cell of the averages row.
pub const AVERAGE_ROW_LABEL: &str = "average";

/// How negative amounts are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeStyle {
    /// `-$1,234.50`
    #[default]
    Minus,
    /// `($1,234.50)`
    Parentheses,
}

/// Currency conventions used when rendering monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: char,
    pub negative_style: NegativeStyle,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL,
            negative_style: NegativeStyle::Minus,
        }
    }
}

impl CurrencyFormat {
    /// Renders `value` with two fractional digits, thousands grouping and the
    /// currency symbol.
    pub fn amount(&self, value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let body = format!("{}{}.{}", self.symbol, group_thousands(whole), fraction);

        // A value that rounds to zero is never shown as negative.
        let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        match (negative, self.negative_style) {
            (false, _) => body,
            (true, NegativeStyle::Minus) => format!("-{body}"),
            (true, NegativeStyle::Parentheses) => format!("({body})"),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders the consolidated result with the default currency conventions.
pub fn format_result(accumulator: &LabelAccumulator) -> String {
    render_csv(&SummaryTable::from(accumulator), &CurrencyFormat::default())
}

/// Builds the structured three-row summary for `accumulator`.
pub fn summarize(accumulator: &LabelAccumulator) -> SummaryTable {
    SummaryTable::from(accumulator)
}

/// Renders the header, total and average rows as comma-delimited text. Every
/// amount is quoted so grouping commas survive a later read; the output ends
/// with a line terminator.
pub fn render_csv(summary: &SummaryTable, currency: &CurrencyFormat) -> String {
    let mut header = vec![String::new()];
    let mut totals = vec![TOTAL_ROW_LABEL.to_string()];
    let mut averages = vec![AVERAGE_ROW_LABEL.to_string()];

    for column in &summary.columns {
        header.push(escape_field(&column.label));
        totals.push(quote(&currency.amount(column.total)));
        averages.push(quote(&currency.amount(column.average)));
    }

    let mut output = String::new();
    for row in [header, totals, averages] {
        output.push_str(&row.join(","));
        output.push_str(LINE_ENDING);
    }
    output
}

fn quote(cell: &str) -> String {
    format!("\"{cell}\"")
}
