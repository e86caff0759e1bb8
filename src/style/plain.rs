//! Character-separated styles (csv, tsv)

use super::{SeparatorSet, Style};
use crate::core::options::Alignment;
use crate::core::rule::Rule;

/// Character-separated table, comma by default.
///
/// This style draws no rules; the `Extra` marker becomes a blank line.
#[derive(Debug, Clone)]
pub struct Csv {
    separators: SeparatorSet,
}

impl Csv {
    /// Comma-separated.
    pub fn new() -> Self {
        Csv::with_separator(",")
    }

    /// Tab-separated (the `tsv` registry name).
    pub fn tab() -> Self {
        Csv::with_separator("\t")
    }

    /// Any custom item separator.
    pub fn with_separator(item_sep: &str) -> Self {
        Csv {
            separators: SeparatorSet {
                first_sep: item_sep.to_string(),
                item_sep: item_sep.to_string(),
                ..Default::default()
            },
        }
    }
}

impl Default for Csv {
    fn default() -> Self {
        Csv::new()
    }
}

impl Style for Csv {
    fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    fn rule(&self, _col_widths: &[usize], _alignments: &[Alignment], rule: Rule) -> Option<String> {
        match rule {
            Rule::Extra => Some(String::new()),
            _ => None,
        }
    }
}
