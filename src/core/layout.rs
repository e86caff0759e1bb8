//! Column layout engine
//!
//! Computes per-column display widths and alignments from the normalized
//! table, lets the active style adjust the widths, and pads every cell
//! to its column's width. Rule markers pass through untouched.

use unicode_width::UnicodeWidthStr;

use super::entry::Line;
use super::options::{AlignSpec, Alignment};
use crate::style::Style;

/// Resolved layout of one table: padded lines plus the widths and
/// alignments the styles need for drawing rules.
pub(crate) struct Layout {
    pub lines: Vec<Line>,
    pub col_widths: Vec<usize>,
    pub alignments: Vec<Alignment>,
}

/// Compute column widths and alignments, then pad every data cell.
pub(crate) fn apply_layout(lines: Vec<Line>, style: &dyn Style, align: &AlignSpec) -> Layout {
    let columns = lines
        .iter()
        .find_map(Line::cells)
        .map_or(0, <[String]>::len);

    let mut col_widths = vec![0usize; columns];
    for line in &lines {
        if let Some(cells) = line.cells() {
            for (width, cell) in col_widths.iter_mut().zip(cells) {
                *width = (*width).max(display_width(cell));
            }
        }
    }

    let alignments = align.resolve(columns);
    let col_widths = style.modify_col_widths(col_widths, &alignments);

    let lines = lines
        .into_iter()
        .map(|line| match line {
            Line::Data(cells) => Line::Data(
                cells
                    .into_iter()
                    .zip(col_widths.iter().zip(&alignments))
                    .map(|(cell, (&width, &alignment))| pad_cell(&cell, width, alignment))
                    .collect(),
            ),
            rule => rule,
        })
        .collect();

    Layout {
        lines,
        col_widths,
        alignments,
    }
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad one cell to the column width, display-width aware.
fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let current = display_width(cell);
    if alignment == Alignment::None || current >= width {
        return cell.to_string();
    }
    let gap = width - current;
    match alignment {
        Alignment::Left => format!("{}{}", cell, " ".repeat(gap)),
        Alignment::Right => format!("{}{}", " ".repeat(gap), cell),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(gap - left))
        }
        Alignment::None => unreachable!(),
    }
}
