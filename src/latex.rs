//! LaTeX table environment wrapper
//!
//! [`print_table_latex`] wraps the `latex`-style table body in a
//! complete `tabular` snippet: caption, label, column specification and
//! the surrounding `\begin{tabular}`/`\end{tabular}` pair. The result
//! can be `\input` directly into a TeX document.
//!
//! Header-row cells are wrapped in head-format macros. Add these to the
//! document preamble:
//!
//! ```text
//! \newcommand{\thfl}[1]{\multicolumn{1}{@{}l}{#1}}  % left-most column
//! \newcommand{\thfm}[1]{\multicolumn{1}{c}{#1}}     % middle columns
//! \newcommand{\thfr}[1]{\multicolumn{1}{c@{}}{#1}}  % right-most column
//! ```
//!
//! To place the table, wrap the generated snippet in a float:
//!
//! ```text
//! \begin{table}[hbtp]
//! \centering
//! % <table content> or \input{<filename>}
//! \end{table}
//! ```

use crate::core::{typeset_lines, RenderOptions, RowEntry};
use crate::style::LatexStyle;
use crate::utils::error::{TypesetError, TypesetResult};
use crate::utils::output::{write_lines, OutputOptions};

/// LaTeX column format: one spec for all data columns, or one per column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFormat {
    Uniform(String),
    PerColumn(Vec<String>),
}

impl Default for ColumnFormat {
    fn default() -> Self {
        ColumnFormat::Uniform("l".to_string())
    }
}

/// Options specific to the LaTeX environment wrapper.
#[derive(Debug, Clone, Default)]
pub struct LatexOptions {
    /// Table label, emitted as `\label{tab:<label>}`. Falls back to the
    /// output file stem; without either, no label line is emitted.
    pub label: Option<String>,
    /// Column format for the data columns (a head column gets a
    /// leading `l` on top of this).
    pub column_format: ColumnFormat,
    /// Extra content placed between `\toprule` and the header row,
    /// e.g. for multi-line table heads.
    pub table_head: Option<String>,
}

/// Typeset a table as a complete LaTeX `tabular` snippet.
///
/// The body is rendered through the `latex` style; exactly one
/// `\toprule` and one `\bottomrule` frame it.
pub fn latex_table_lines(
    table: &[RowEntry],
    opts: &RenderOptions,
    latex_opts: &LatexOptions,
    label_fallback: Option<&str>,
) -> TypesetResult<Vec<String>> {
    let data_columns = count_data_columns(table, opts)?;

    // Header cells go through the head-format macros; the caption is
    // emitted by the wrapper, not the body.
    let mut body_opts = opts.clone();
    body_opts.caption = None;
    if let Some(head_row) = &opts.head_row {
        let last = head_row.len().saturating_sub(1);
        let wrapped: Vec<String> = head_row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                // The right-edge macro wins for a single-column header
                if i == last {
                    format!("\\thfr{{{}}}", cell)
                } else if i == 0 && opts.head_col.is_none() {
                    format!("\\thfl{{{}}}", cell)
                } else {
                    format!("\\thfm{{{}}}", cell)
                }
            })
            .collect();
        body_opts.head_row = Some(wrapped);
        if opts.head_col.is_some() {
            body_opts.top_left = format!("\\thfl{{{}}}", opts.top_left);
        }
    }

    let body = typeset_lines(table, &LatexStyle::new(), &body_opts)?;

    let mut lines = Vec::with_capacity(body.len() + 4);
    if let Some(caption) = &opts.caption {
        lines.push(format!("\\caption{{{}}}", caption));
    }
    if let Some(label) = opts_label(latex_opts, label_fallback) {
        lines.push(format!("\\label{{tab:{}}}", label));
    }
    lines.push(format!(
        "\\begin{{tabular}}{{{}}}",
        column_spec(latex_opts, opts, data_columns)?
    ));

    // Body starts with \toprule; optional extra head goes right after it
    let mut body = body.into_iter();
    if let Some(top) = body.next() {
        lines.push(top);
    }
    if let Some(head) = &latex_opts.table_head {
        lines.push(head.clone());
    }
    lines.extend(body);

    lines.push("\\end{tabular}".to_string());
    Ok(lines)
}

/// Typeset a LaTeX table and hand it to the output sink.
pub fn print_table_latex(
    table: &[RowEntry],
    opts: &RenderOptions,
    latex_opts: &LatexOptions,
    output: &OutputOptions,
) -> TypesetResult<Vec<String>> {
    let fallback = output
        .file
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(str::to_string);
    let lines = latex_table_lines(table, opts, latex_opts, fallback.as_deref())?;
    write_lines(&lines, output);
    Ok(lines)
}

fn opts_label(latex_opts: &LatexOptions, fallback: Option<&str>) -> Option<String> {
    latex_opts
        .label
        .clone()
        .or_else(|| fallback.map(str::to_string))
}

/// Assemble the single-line column specification, e.g. `@{}l*{2}{l}@{}`.
fn column_spec(
    latex_opts: &LatexOptions,
    opts: &RenderOptions,
    data_columns: usize,
) -> TypesetResult<String> {
    let mut spec = String::from("@{}");
    if opts.head_col.is_some() {
        spec.push('l');
    }
    match &latex_opts.column_format {
        ColumnFormat::Uniform(fmt) => {
            spec.push_str(&format!("*{{{}}}{{{}}}", data_columns, fmt));
        }
        ColumnFormat::PerColumn(formats) => {
            if formats.len() != data_columns {
                return Err(TypesetError::invalid_column_format(format!(
                    "{} column formats for {} data columns",
                    formats.len(),
                    data_columns
                )));
            }
            for fmt in formats {
                spec.push_str(&format!("*{{1}}{{{}}}", fmt));
            }
        }
    }
    spec.push_str("@{}");
    Ok(spec)
}

/// Number of data columns, transposition accounted for.
fn count_data_columns(table: &[RowEntry], opts: &RenderOptions) -> TypesetResult<usize> {
    let mut rows = 0usize;
    let mut columns = 0usize;
    for entry in table {
        if let RowEntry::Data(cells) = entry {
            if rows == 0 {
                columns = cells.len();
            }
            rows += 1;
        }
    }
    if rows == 0 {
        return Err(TypesetError::shape("table has no data rows"));
    }
    Ok(if opts.transpose_data { rows } else { columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HeadColumn, Rule};

    #[test]
    fn test_column_spec_uniform() {
        let latex_opts = LatexOptions::default();
        let opts = RenderOptions::default();
        assert_eq!(column_spec(&latex_opts, &opts, 3).unwrap(), "@{}*{3}{l}@{}");
    }

    #[test]
    fn test_column_spec_head_col_and_per_column() {
        let latex_opts = LatexOptions {
            column_format: ColumnFormat::PerColumn(vec!["r".to_string(), "c".to_string()]),
            ..Default::default()
        };
        let mut opts = RenderOptions::default();
        opts.head_col = Some(HeadColumn::Enumerate);
        assert_eq!(
            column_spec(&latex_opts, &opts, 2).unwrap(),
            "@{}l*{1}{r}*{1}{c}@{}"
        );
    }

    #[test]
    fn test_column_spec_length_mismatch() {
        let latex_opts = LatexOptions {
            column_format: ColumnFormat::PerColumn(vec!["r".to_string()]),
            ..Default::default()
        };
        let err = column_spec(&latex_opts, &RenderOptions::default(), 2).unwrap_err();
        assert!(matches!(err, TypesetError::InvalidColumnFormat { .. }));
    }

    #[test]
    fn test_full_snippet() {
        let table = vec![RowEntry::row([1, 2])];
        let mut opts = RenderOptions::with_head_row(["X", "Y"]);
        opts.caption = Some("T".to_string());
        let latex_opts = LatexOptions {
            label: Some("t1".to_string()),
            ..Default::default()
        };
        let lines = latex_table_lines(&table, &opts, &latex_opts, None).unwrap();
        assert_eq!(
            lines,
            vec![
                "\\caption{T}",
                "\\label{tab:t1}",
                "\\begin{tabular}{@{}*{2}{l}@{}}",
                "\\toprule",
                "\\thfl{X}&\\thfr{Y}\\\\",
                "\\midrule",
                "1&2\\\\",
                "\\bottomrule",
                "\\end{tabular}",
            ]
        );
    }

    #[test]
    fn test_single_column_header_uses_right_macro() {
        let table = vec![RowEntry::row([1])];
        let opts = RenderOptions::with_head_row(["Only"]);
        let lines =
            latex_table_lines(&table, &opts, &LatexOptions::default(), None).unwrap();
        assert!(lines.contains(&"\\thfr{Only}\\\\".to_string()));
    }

    #[test]
    fn test_label_falls_back_to_file_stem() {
        let table = vec![RowEntry::row([1])];
        let opts = RenderOptions::default();
        let lines =
            latex_table_lines(&table, &opts, &LatexOptions::default(), Some("results")).unwrap();
        assert!(lines.contains(&"\\label{tab:results}".to_string()));
    }

    #[test]
    fn test_no_label_without_name() {
        let table = vec![RowEntry::row([1])];
        let lines =
            latex_table_lines(&table, &RenderOptions::default(), &LatexOptions::default(), None)
                .unwrap();
        assert!(!lines.iter().any(|l| l.starts_with("\\label")));
    }

    #[test]
    fn test_table_head_after_toprule() {
        let table = vec![RowEntry::row([1])];
        let latex_opts = LatexOptions {
            table_head: Some("\\multicolumn{1}{c}{wide}\\\\".to_string()),
            ..Default::default()
        };
        let lines =
            latex_table_lines(&table, &RenderOptions::default(), &latex_opts, None).unwrap();
        let top = lines.iter().position(|l| l == "\\toprule").unwrap();
        assert_eq!(lines[top + 1], "\\multicolumn{1}{c}{wide}\\\\");
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = vec![RowEntry::Rule(Rule::Extra)];
        assert!(latex_table_lines(
            &table,
            &RenderOptions::default(),
            &LatexOptions::default(),
            None
        )
        .is_err());
    }
}
