//! Rendering styles
//!
//! A style maps one row of pre-aligned text cells, or one rule marker,
//! into a concrete line of output for a specific format:
//!
//! - `csv` / `tsv`: character-separated, no frame
//! - `latex`: `&`-separated with booktabs rules
//! - `markdown`: pipe-delimited with an alignment-encoding head rule
//! - `debug`: visible separators and rule names, for inspection
//!
//! Custom styles implement [`Style`] and can be made discoverable by
//! name through a [`StyleRegistry`].

mod debug;
mod latex;
mod markdown;
mod plain;
mod registry;

pub use debug::DebugStyle;
pub use latex::LatexStyle;
pub use markdown::Markdown;
pub use plain::Csv;
pub use registry::{resolve_style, StyleRegistry};

use crate::core::options::Alignment;
use crate::core::rule::Rule;

/// Separator tokens of a style, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct SeparatorSet {
    /// Each line starts with this.
    pub line_start: String,
    /// Separator between the header column and the second column.
    pub first_sep: String,
    /// Separator between all remaining columns.
    pub item_sep: String,
    /// Appended to the end of each line.
    pub line_end: String,
    /// Put between a separator and the cell content to its right.
    pub pad_left: String,
    /// Put between the cell content and the separator to its right.
    pub pad_right: String,
}

/// A table rendering backend.
pub trait Style {
    /// The style's separator tokens.
    fn separators(&self) -> &SeparatorSet;

    /// Join already-aligned cells into one output line.
    fn row(&self, cells: &[String]) -> String {
        let s = self.separators();
        let mut line = String::new();
        line.push_str(&s.line_start);
        if let Some((first, rest)) = cells.split_first() {
            line.push_str(&s.pad_right);
            line.push_str(first);
            if !rest.is_empty() {
                line.push_str(&s.pad_left);
                line.push_str(&s.first_sep);
                line.push_str(&s.pad_right);
                let item_sep = format!("{}{}{}", s.pad_left, s.item_sep, s.pad_right);
                line.push_str(&rest.join(&item_sep));
            }
            line.push_str(&s.pad_left);
        }
        line.push_str(&s.line_end);
        line
    }

    /// Text of the given rule marker, or `None` when this style draws
    /// no visual rule for it.
    fn rule(&self, col_widths: &[usize], alignments: &[Alignment], rule: Rule) -> Option<String> {
        let _ = (col_widths, alignments, rule);
        None
    }

    /// Adjust the computed column widths; identity for most styles.
    fn modify_col_widths(&self, col_widths: Vec<usize>, alignments: &[Alignment]) -> Vec<usize> {
        let _ = alignments;
        col_widths
    }
}
