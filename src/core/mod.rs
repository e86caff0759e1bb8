//! Core typesetting pipeline
//!
//! The pipeline turns a raw table into output lines in four stages:
//!
//! ```text
//! raw rows -> normalize -> layout -> style rendering -> lines
//! ```
//!
//! Normalization formats cells to text, attaches headers and splits
//! multi-line rows; layout pads every cell to its column width; the
//! style maps rows and rule markers to concrete text.

pub mod entry;
pub mod format;
pub mod layout;
pub mod normalize;
pub mod options;
pub mod rule;
pub mod value;


pub use entry::{Line, RowEntry};
pub use options::{
    nan_dashes, replace, AlignSpec, Alignment, Formatter, HeadColumn, RenderOptions,
};
pub use rule::Rule;
pub use value::Value;

use crate::style::Style;
use crate::utils::error::TypesetResult;

/// Typeset a table into output lines with the given style.
///
/// The marker sequence is fully materialized before rendering: a `Top`
/// rule opens the table, a `Mid` rule follows every data row and a
/// `Bottom` rule closes it. Collapsing then resolves those against the
/// normalizer's markers by priority, so an explicit `Extra` suppresses
/// the automatic `Mid`, and `Bottom` swallows the trailing `Mid`.
/// Markers the style draws no rule for produce no line.
pub fn typeset_lines(
    table: &[RowEntry],
    style: &dyn Style,
    opts: &RenderOptions,
) -> TypesetResult<Vec<String>> {
    let body = normalize::normalize(table, opts)?;

    let mut sequence = Vec::with_capacity(body.len() * 2 + 2);
    sequence.push(Line::Rule(Rule::Top));
    for line in body {
        let is_data = !line.is_rule();
        sequence.push(line);
        if is_data {
            sequence.push(Line::Rule(Rule::Mid));
        }
    }
    sequence.push(Line::Rule(Rule::Bottom));
    let sequence = normalize::collapse_rules(sequence);

    let layout = layout::apply_layout(sequence, style, &opts.align);

    let mut out = Vec::new();
    if let Some(caption) = &opts.caption {
        out.push(caption.clone());
    }
    for line in layout.lines {
        match line {
            Line::Data(cells) => out.push(style.row(&cells)),
            Line::Rule(rule) => {
                if let Some(text) = style.rule(&layout.col_widths, &layout.alignments, rule) {
                    out.push(text);
                }
            }
        }
    }
    Ok(out)
}
