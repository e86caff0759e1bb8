//! # tabwrite
//!
//! A table typesetting library: turn rows of values into finished
//! text tables in CSV, TSV, Markdown, LaTeX or custom styles.
//!
//! The pipeline formats cells, attaches headers, aligns columns by
//! display width and draws horizontal rules where the style wants
//! them. Everything is driven by [`RenderOptions`]; a single call
//! produces the complete table as a list of lines.
//!
//! ## Quick start
//!
//! ```
//! use tabwrite::{render_table, RenderOptions, RowEntry};
//!
//! let table = vec![
//!     RowEntry::row(["a", "1"]),
//!     RowEntry::row(["b", "2"]),
//! ];
//! let opts = RenderOptions::with_head_row(["Name", "Val"]);
//! let lines = render_table(&table, "csv", &opts).unwrap();
//! assert_eq!(lines, vec!["Name,Val", "a,1", "b,2"]);
//! ```
//!
//! ## Markdown with alignment
//!
//! ```
//! use tabwrite::{render_table, AlignSpec, Alignment, RenderOptions, RowEntry};
//!
//! let table = vec![RowEntry::row([1, 2])];
//! let mut opts = RenderOptions::with_head_row(["X", "Y"]);
//! opts.align = AlignSpec::Uniform(Alignment::Left);
//! let lines = render_table(&table, "markdown", &opts).unwrap();
//! assert_eq!(lines, vec!["|X   |Y   |", "|:---|:---|", "|1   |2   |"]);
//! ```
//!
//! ## LaTeX snippets
//!
//! [`print_table_latex`] wraps the LaTeX body in a complete `tabular`
//! environment with caption, label and column format, ready to be
//! `\input` into a document.

pub mod core;
pub mod latex;
pub mod style;
pub mod utils;

pub use crate::core::{
    nan_dashes, typeset_lines, AlignSpec, Alignment, Formatter, HeadColumn, RenderOptions,
    RowEntry, Rule, Value,
};
pub use crate::latex::{print_table_latex, ColumnFormat, LatexOptions};
pub use crate::style::{
    resolve_style, Csv, DebugStyle, LatexStyle, Markdown, Style, StyleRegistry,
};
pub use crate::utils::{write_lines, OutputOptions, TypesetError, TypesetResult};

/// Typeset a table with a style instance.
pub fn typeset(
    table: &[RowEntry],
    style: &dyn Style,
    opts: &RenderOptions,
) -> TypesetResult<Vec<String>> {
    typeset_lines(table, style, opts)
}

/// Typeset a table with a builtin style named `style_name`.
pub fn render_table(
    table: &[RowEntry],
    style_name: &str,
    opts: &RenderOptions,
) -> TypesetResult<Vec<String>> {
    let style = resolve_style(style_name)?;
    typeset_lines(table, style.as_ref(), opts)
}

/// Typeset a table and hand the lines to the output sink.
///
/// The finished lines are returned as well, so callers can post-process
/// them regardless of where they went.
pub fn print_table(
    table: &[RowEntry],
    style_name: &str,
    opts: &RenderOptions,
    output: &OutputOptions,
) -> TypesetResult<Vec<String>> {
    let lines = render_table(table, style_name, opts)?;
    write_lines(&lines, output);
    Ok(lines)
}
