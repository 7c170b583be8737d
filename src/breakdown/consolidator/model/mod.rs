use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

/// Raw lines of one input table. The first line is the header; every further
/// line is a data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub lines: Vec<String>,
}

impl RawTable {
    /// Splits in-memory text into lines the way a line reader would: lines end
    /// at `\n`, `\r\n` or a lone `\r`, and a final terminator does not
    /// produce a trailing empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let Some(end) = rest.find(['\r', '\n']) else {
                lines.push(rest.to_string());
                break;
            };
            lines.push(rest[..end].to_string());
            let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + terminator..];
        }
        Self { lines }
    }

    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().skip(1).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RawTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Running totals for a single label.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelTotals {
    pub sum: f64,
    /// Number of non-zero values added to `sum`.
    pub count: u64,
}

impl LabelTotals {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of the contributing values, or zero when nothing contributed.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Per-label totals keyed by exact header text. Iteration follows the order in
/// which labels were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelAccumulator {
    labels: IndexMap<String, LabelTotals>,
}

impl LabelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `label` with empty totals unless it is already known, and
    /// returns its position in first-seen order.
    pub fn ensure_label(&mut self, label: &str) -> usize {
        match self.labels.get_index_of(label) {
            Some(index) => index,
            None => {
                self.labels
                    .insert_full(label.to_string(), LabelTotals::default())
                    .0
            }
        }
    }

    /// Adds `value` to the totals of the label at `index`, as returned by
    /// [`ensure_label`](Self::ensure_label).
    pub fn record(&mut self, index: usize, value: f64) {
        if let Some((_, totals)) = self.labels.get_index_mut(index) {
            totals.add(value);
        }
    }

    pub fn get(&self, label: &str) -> Option<&LabelTotals> {
        self.labels.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, LabelTotals> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One output column of the consolidated summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryColumn {
    pub label: String,
    pub total: f64,
    pub average: f64,
    pub count: u64,
}

/// Structured form of the consolidated result, one column per label in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub columns: Vec<SummaryColumn>,
}

impl From<&LabelAccumulator> for SummaryTable {
    fn from(accumulator: &LabelAccumulator) -> Self {
        let columns = accumulator
            .iter()
            .map(|(label, totals)| SummaryColumn {
                label: label.clone(),
                total: totals.sum,
                average: totals.average(),
                count: totals.count,
            })
            .collect();
        Self { columns }
    }
}
