//! LaTeX tabular style

use super::{SeparatorSet, Style};
use crate::core::options::Alignment;
use crate::core::rule::Rule;

/// LaTeX table body: cells separated by `&`, lines ended with `\\`.
///
/// Rules use [booktabs](https://ctan.org/pkg/booktabs/): the table opens
/// with `\toprule`, the header is separated by `\midrule` and the body
/// closes with `\bottomrule`. The `Extra` marker becomes
/// `\addlinespace`, a small vertical gap between two rows.
#[derive(Debug, Clone)]
pub struct LatexStyle {
    separators: SeparatorSet,
}

impl LatexStyle {
    pub fn new() -> Self {
        LatexStyle {
            separators: SeparatorSet {
                first_sep: "&".to_string(),
                item_sep: "&".to_string(),
                line_end: "\\\\".to_string(),
                ..Default::default()
            },
        }
    }
}

impl Default for LatexStyle {
    fn default() -> Self {
        LatexStyle::new()
    }
}

impl Style for LatexStyle {
    fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    fn rule(&self, _col_widths: &[usize], _alignments: &[Alignment], rule: Rule) -> Option<String> {
        match rule {
            Rule::Top => Some("\\toprule".to_string()),
            Rule::Head => Some("\\midrule".to_string()),
            Rule::Bottom => Some("\\bottomrule".to_string()),
            Rule::Extra => Some("\\addlinespace".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_row() {
        assert_eq!(LatexStyle::new().row(&cells(&["a", "b", "c"])), "a&b&c\\\\");
    }

    #[test]
    fn test_booktabs_rules() {
        let latex = LatexStyle::new();
        let w = [1usize];
        let a = [Alignment::Left];
        assert_eq!(latex.rule(&w, &a, Rule::Top).unwrap(), "\\toprule");
        assert_eq!(latex.rule(&w, &a, Rule::Head).unwrap(), "\\midrule");
        assert_eq!(latex.rule(&w, &a, Rule::Bottom).unwrap(), "\\bottomrule");
        assert_eq!(latex.rule(&w, &a, Rule::Extra).unwrap(), "\\addlinespace");
        assert_eq!(latex.rule(&w, &a, Rule::Mid), None);
        assert_eq!(latex.rule(&w, &a, Rule::No), None);
    }
}
