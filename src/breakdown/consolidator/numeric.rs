use once_cell::sync::Lazy;
use regex::Regex;

use crate::breakdown::consolidator::error::{Result, ToolError};

/// Currency symbol accepted when no other symbol is configured.
pub const DEFAULT_CURRENCY_SYMBOL: char = '$';

static DEFAULT_PARSER: Lazy<NumericCellParser> = Lazy::new(|| NumericCellParser {
    symbol: DEFAULT_CURRENCY_SYMBOL,
    pattern: Regex::new(&cell_pattern(DEFAULT_CURRENCY_SYMBOL)).unwrap(),
});

fn cell_pattern(symbol: char) -> String {
    let symbol_pattern = regex::escape(&symbol.to_string());
    format!(
        r#"^(?P<open_quote>")?(?P<outer_minus>-)?(?P<open_paren>\()?(?P<minus>-)?(?:{symbol_pattern})?(?:[0-9]*|[0-9]{{1,3}}(?:,[0-9]{{3}})+)(?:\.[0-9]+)?(?:{symbol_pattern})?\s*(?P<close_paren>\))?(?P<close_quote>")?$"#
    )
}

/// Checks that `symbol` can mark currency without colliding with digits,
/// separators, signs, enclosures or whitespace, which are stripped or
/// interpreted while parsing.
pub fn validate_currency_symbol(symbol: char) -> Result<char> {
    if symbol.is_ascii_digit()
        || symbol.is_whitespace()
        || symbol.is_control()
        || matches!(symbol, '.' | ',' | '-' | '(' | ')' | '"')
    {
        return Err(ToolError::InvalidCurrencySymbol(symbol));
    }
    Ok(symbol)
}

/// Interpretation of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    /// Blank cell. Counts as zero.
    Empty,
    /// Signed numeric value.
    Numeric(f64),
    /// Text that is not an accepted number format.
    Invalid,
}

impl ParsedValue {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ParsedValue::Invalid)
    }

    /// Numeric value of the cell; blank and invalid cells yield zero.
    pub fn value(&self) -> f64 {
        match self {
            ParsedValue::Numeric(value) => *value,
            ParsedValue::Empty | ParsedValue::Invalid => 0.0,
        }
    }
}

/// Recognises accounting-style numbers such as `1,000`, `$12.50`, `(100)` or
/// `"-$1,234.00"`.
///
/// The accepted shape, in order: optional quote, optional `(` with a single
/// optional `-` on either side of it, optional currency symbol, digits
/// either ungrouped or grouped in threes by `,` (the leftmost group may hold
/// one to three digits), an optional fraction, optional trailing currency
/// symbol, trailing whitespace, then the closing `)` and quote matching the
/// openers.
#[derive(Debug, Clone)]
pub struct NumericCellParser {
    symbol: char,
    pattern: Regex,
}

impl NumericCellParser {
    /// Builds a parser that accepts `symbol` as the currency marker.
    pub fn new(symbol: char) -> Result<Self> {
        let symbol = validate_currency_symbol(symbol)?;
        let pattern = Regex::new(&cell_pattern(symbol))?;
        Ok(Self { symbol, pattern })
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Classifies `field` as blank, numeric, or invalid.
    pub fn classify(&self, field: &str) -> ParsedValue {
        if field.is_empty() {
            return ParsedValue::Empty;
        }

        let Some(captures) = self.pattern.captures(field) else {
            return ParsedValue::Invalid;
        };

        let quoted = captures.name("open_quote").is_some();
        let parenthesised = captures.name("open_paren").is_some();
        let outer_minus = captures.name("outer_minus").is_some();
        let inner_minus = captures.name("minus").is_some();
        if quoted != captures.name("close_quote").is_some()
            || parenthesised != captures.name("close_paren").is_some()
            || (outer_minus && inner_minus)
        {
            return ParsedValue::Invalid;
        }

        // Parentheses and a leading minus each negate; together they cancel.
        let negative = parenthesised ^ (outer_minus || inner_minus);

        let digits: String = field
            .chars()
            .filter(|&ch| {
                ch != self.symbol
                    && !matches!(ch, '"' | ',' | '-' | '(' | ')')
                    && !ch.is_whitespace()
            })
            .collect();

        // Digit runs too long for an f64 overflow to infinity.
        match digits.parse::<f64>() {
            Ok(magnitude) if !magnitude.is_finite() => ParsedValue::Invalid,
            Ok(magnitude) if negative => ParsedValue::Numeric(-magnitude),
            Ok(magnitude) => ParsedValue::Numeric(magnitude),
            Err(_) => ParsedValue::Invalid,
        }
    }

    /// Returns whether `field` is numeric together with its signed value.
    /// Blank fields are numeric with value zero.
    pub fn parse(&self, field: &str) -> (bool, f64) {
        let parsed = self.classify(field);
        (parsed.is_numeric(), parsed.value())
    }
}

impl Default for NumericCellParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

/// Parses `field` with the default `$` currency symbol.
pub fn parse_numeric_cell(field: &str) -> (bool, f64) {
    DEFAULT_PARSER.parse(field)
}

/// Classifies `field` with the default `$` currency symbol.
pub fn classify_cell(field: &str) -> ParsedValue {
    DEFAULT_PARSER.classify(field)
}
