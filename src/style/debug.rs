//! Debug style: every separator visible, every rule named

use super::{SeparatorSet, Style};
use crate::core::options::Alignment;
use crate::core::rule::Rule;

/// Inspection style stamping the rule marker names into the output.
///
/// Only useful for debugging the pipeline: the line frame, the header
/// column separator and the cell padding are all distinct, and every
/// rule marker renders as `---<name>---`.
#[derive(Debug, Clone)]
pub struct DebugStyle {
    separators: SeparatorSet,
}

impl DebugStyle {
    pub fn new() -> Self {
        DebugStyle {
            separators: SeparatorSet {
                line_start: "^".to_string(),
                first_sep: "||".to_string(),
                item_sep: "|".to_string(),
                line_end: "$".to_string(),
                pad_left: " <".to_string(),
                pad_right: "> ".to_string(),
            },
        }
    }
}

impl Default for DebugStyle {
    fn default() -> Self {
        DebugStyle::new()
    }
}

impl Style for DebugStyle {
    fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    fn rule(&self, _col_widths: &[usize], _alignments: &[Alignment], rule: Rule) -> Option<String> {
        Some(format!("---{}---", rule.name()))
    }
}
