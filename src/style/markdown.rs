//! Markdown pipe-table style

use super::{SeparatorSet, Style};
use crate::core::options::Alignment;
use crate::core::rule::Rule;

/// Markdown table: pipe-delimited cells, one head rule.
///
/// The head rule encodes each column's alignment in its dashes
/// (`:---`, `:---:`, `---:`). No other rule is drawn.
#[derive(Debug, Clone)]
pub struct Markdown {
    separators: SeparatorSet,
}

impl Markdown {
    pub fn new() -> Self {
        Markdown {
            separators: SeparatorSet {
                line_start: "|".to_string(),
                first_sep: "|".to_string(),
                item_sep: "|".to_string(),
                line_end: "|".to_string(),
                ..Default::default()
            },
        }
    }

    /// Dashes of one head-rule cell, alignment markers included.
    fn rule_cell(width: usize, alignment: Alignment) -> String {
        match alignment {
            Alignment::None => "-".repeat(width.max(3)),
            Alignment::Left => format!(":{}", "-".repeat(width.saturating_sub(1).max(3))),
            Alignment::Center => {
                format!(":{}:", "-".repeat(width.saturating_sub(2).max(3)))
            }
            Alignment::Right => format!("{}:", "-".repeat(width.saturating_sub(1).max(3))),
        }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Markdown::new()
    }
}

impl Style for Markdown {
    fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    fn rule(&self, col_widths: &[usize], alignments: &[Alignment], rule: Rule) -> Option<String> {
        if rule != Rule::Head {
            return None;
        }
        let cells: Vec<String> = col_widths
            .iter()
            .zip(alignments)
            .map(|(&width, &alignment)| Markdown::rule_cell(width, alignment))
            .collect();
        Some(self.row(&cells))
    }

    /// Markdown needs minimum column widths so the head rule stays
    /// syntactically valid: 4 for left/right, 5 for center, 3 without
    /// alignment.
    fn modify_col_widths(&self, col_widths: Vec<usize>, alignments: &[Alignment]) -> Vec<usize> {
        col_widths
            .into_iter()
            .zip(alignments)
            .map(|(width, alignment)| match alignment {
                Alignment::None => width.max(3),
                Alignment::Center => width.max(5),
                Alignment::Left | Alignment::Right => width.max(4),
            })
            .collect()
    }
}
