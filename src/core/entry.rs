//! Row entries: the table input model
//!
//! A table is an ordered sequence of entries, where each entry is either
//! a data row or a rule marker. Modeling the mix as a sum type keeps the
//! pipeline free of per-entry type checks.

use super::rule::Rule;
use super::value::Value;

/// One entry of the raw input table.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEntry {
    /// A data row of heterogeneous cells.
    Data(Vec<Value>),
    /// A horizontal separator in place of a row.
    Rule(Rule),
}

impl RowEntry {
    /// Build a data row from anything convertible to cell values.
    ///
    /// ```
    /// use tabwrite::RowEntry;
    /// let row = RowEntry::row(["a", "b"]);
    /// ```
    pub fn row<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        RowEntry::Data(cells.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Value>> for RowEntry {
    fn from(cells: Vec<Value>) -> Self {
        RowEntry::Data(cells)
    }
}

impl From<Rule> for RowEntry {
    fn from(rule: Rule) -> Self {
        RowEntry::Rule(rule)
    }
}

/// One line of the normalized table: cells are already text.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Data(Vec<String>),
    Rule(Rule),
}

impl Line {
    pub fn is_rule(&self) -> bool {
        matches!(self, Line::Rule(_))
    }

    /// Cells of a data line, or `None` for a rule marker.
    pub fn cells(&self) -> Option<&[String]> {
        match self {
            Line::Data(cells) => Some(cells),
            Line::Rule(_) => None,
        }
    }
}
