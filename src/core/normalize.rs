//! Table normalizer
//!
//! Converts the raw heterogeneous input (data rows and rule markers,
//! optional header row/column, format templates, replacement map,
//! transpose flag) into a uniform sequence of text lines. Shape
//! mismatches are validated eagerly and rejected; silent zipping would
//! hide caller bugs.
//!
//! Every stage returns a new structure; caller-owned inputs are never
//! mutated.

use super::entry::{Line, RowEntry};
use super::format::format_cell;
use super::options::{replace, HeadColumn, RenderOptions};
use super::rule::Rule;
use super::value::Value;
use crate::utils::error::{TypesetError, TypesetResult};

/// Run the full normalization pipeline.
///
/// The returned sequence holds the header row (if any), the automatic
/// head rule, the formatted body rows with caller markers interleaved,
/// multi-line rows split into sub-rows, and adjacent markers collapsed.
/// Top/mid/bottom rules are the orchestrator's business.
pub(crate) fn normalize(table: &[RowEntry], opts: &RenderOptions) -> TypesetResult<Vec<Line>> {
    // Separate data rows from markers; a marker remembers how many data
    // rows precede it, so transposition cannot displace it.
    let mut rows: Vec<Vec<Value>> = Vec::new();
    let mut markers: Vec<(usize, Rule)> = Vec::new();
    for entry in table {
        match entry {
            RowEntry::Data(cells) => rows.push(cells.clone()),
            RowEntry::Rule(rule) => markers.push((rows.len(), *rule)),
        }
    }

    if opts.transpose_data {
        rows = transpose(rows)?;
    }
    check_rectangular(&rows)?;

    let columns = rows.first().map_or(0, Vec::len);
    if let Some(head_row) = &opts.head_row {
        if !rows.is_empty() && head_row.len() != columns {
            return Err(TypesetError::shape(format!(
                "header row has {} cells, data rows have {}",
                head_row.len(),
                columns
            )));
        }
    }

    // Format every data cell to text; failures fall back per cell.
    let mut grid: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, value)| format_cell(opts.formatter.template_for(r, c), value))
                .collect()
        })
        .collect();

    // Header column: explicit labels or 1..N enumeration.
    let head_col = match &opts.head_col {
        Some(HeadColumn::Enumerate) => Some((1..=grid.len()).map(|i| i.to_string()).collect()),
        Some(HeadColumn::Labels(labels)) => {
            if labels.len() != grid.len() {
                return Err(TypesetError::shape(format!(
                    "header column has {} labels, table has {} rows",
                    labels.len(),
                    grid.len()
                )));
            }
            Some(labels.clone())
        }
        None => Option::<Vec<String>>::None,
    };
    if let Some(labels) = &head_col {
        for (row, label) in grid.iter_mut().zip(labels) {
            row.insert(0, label.clone());
        }
    }

    let mut lines: Vec<Line> = Vec::new();
    if let Some(head_row) = &opts.head_row {
        let mut header = head_row.clone();
        if head_col.is_some() {
            header.insert(0, opts.top_left.clone());
        }
        lines.push(Line::Data(header));
        if !opts.omit_head_rule {
            lines.push(Line::Rule(Rule::Head));
        }
    }

    // Body rows with caller markers re-interleaved at their positions.
    let mut marker_iter = markers.into_iter().peekable();
    for (i, row) in grid.into_iter().enumerate() {
        while let Some((_, rule)) = marker_iter.next_if(|(at, _)| *at <= i) {
            lines.push(Line::Rule(rule));
        }
        lines.push(Line::Data(row));
    }
    for (_, rule) in marker_iter {
        lines.push(Line::Rule(rule));
    }

    if let Some(map) = &opts.replacement {
        for line in &mut lines {
            if let Line::Data(cells) = line {
                replace(std::slice::from_mut(cells), map);
            }
        }
    }

    Ok(collapse_rules(split_multiline(lines)))
}

/// Split rows with embedded line breaks into synchronized sub-rows.
///
/// Shorter cells contribute empty strings for their missing lines. A
/// `No` rule between the sub-rows keeps styles from drawing a separator
/// inside what is logically one row.
fn split_multiline(lines: Vec<Line>) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let cells = match line {
            Line::Data(ref cells) if cells.iter().any(|c| c.contains('\n')) => cells.clone(),
            other => {
                out.push(other);
                continue;
            }
        };
        let split: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(1);
        for level in 0..height {
            let sub: Vec<String> = split
                .iter()
                .map(|cell| cell.get(level).copied().unwrap_or("").to_string())
                .collect();
            out.push(Line::Data(sub));
            if level + 1 < height {
                out.push(Line::Rule(Rule::No));
            }
        }
    }
    out
}

/// Collapse runs of adjacent rule markers, keeping the most significant
/// (lowest priority value) marker of each run.
pub(crate) fn collapse_rules(lines: Vec<Line>) -> Vec<Line> {
    let mut out: Vec<Line> = Vec::with_capacity(lines.len());
    for line in lines {
        match (&line, out.last_mut()) {
            (Line::Rule(new), Some(Line::Rule(kept))) => {
                if new.priority() < kept.priority() {
                    *kept = *new;
                }
            }
            _ => out.push(line),
        }
    }
    out
}

fn check_rectangular(rows: &[Vec<Value>]) -> TypesetResult<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(TypesetError::shape(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                first.len()
            )));
        }
    }
    Ok(())
}

/// Transpose the data body; rows must be rectangular.
fn transpose(rows: Vec<Vec<Value>>) -> TypesetResult<Vec<Vec<Value>>> {
    check_rectangular(&rows)?;
    let Some(first) = rows.first() else {
        return Ok(rows);
    };
    let columns = first.len();
    let mut transposed: Vec<Vec<Value>> = vec![Vec::new(); columns];
    for row in rows {
        for (c, value) in row.into_iter().enumerate() {
            transposed[c].push(value);
        }
    }
    Ok(transposed)
}
