//! Integration tests for the public typesetting API

use pretty_assertions::assert_eq;
use tabwrite::{
    nan_dashes, print_table_latex, render_table, typeset, AlignSpec, Alignment, ColumnFormat,
    Csv, Formatter, HeadColumn, LatexOptions, OutputOptions, RenderOptions, RowEntry, Rule,
    StyleRegistry, TypesetError, Value,
};

fn sample_table() -> Vec<RowEntry> {
    vec![RowEntry::row(["a", "1"]), RowEntry::row(["b", "2"])]
}

// ============================================================
// CSV
// ============================================================

#[test]
fn csv_with_header_row() {
    let opts = RenderOptions::with_head_row(["Name", "Val"]);
    let lines = render_table(&sample_table(), "csv", &opts).unwrap();
    assert_eq!(lines, vec!["Name,Val", "a,1", "b,2"]);
}

#[test]
fn csv_round_trips_through_parsing() {
    let opts = RenderOptions::with_head_row(["Name", "Val"]);
    let lines = render_table(&sample_table(), "csv", &opts).unwrap();

    let reparsed: Vec<RowEntry> = lines[1..]
        .iter()
        .map(|line| RowEntry::row(line.split(',')))
        .collect();
    let again = render_table(&reparsed, "csv", &opts).unwrap();
    assert_eq!(lines, again);
}

#[test]
fn tsv_uses_tab_separator() {
    let lines = render_table(&sample_table(), "tsv", &RenderOptions::default()).unwrap();
    assert_eq!(lines, vec!["a\t1", "b\t2"]);
}

// ============================================================
// Markdown
// ============================================================

#[test]
fn markdown_left_aligned() {
    let mut opts = RenderOptions::with_head_row(["Name", "Val"]);
    opts.align = AlignSpec::parse("l").unwrap();
    let lines = render_table(&sample_table(), "markdown", &opts).unwrap();
    assert_eq!(
        lines,
        vec!["|Name|Val |", "|:---|:---|", "|a   |1   |", "|b   |2   |"]
    );
}

#[test]
fn markdown_center_minimum_width() {
    let mut opts = RenderOptions::with_head_row(["x"]);
    opts.align = AlignSpec::parse("c").unwrap();
    let table = vec![RowEntry::row(["x"])];
    let lines = render_table(&table, "markdown", &opts).unwrap();
    assert_eq!(lines, vec!["|  x  |", "|:---:|", "|  x  |"]);
}

#[test]
fn markdown_lines_have_uniform_display_width() {
    let mut opts = RenderOptions::with_head_row(["Name", "Val"]);
    opts.align = AlignSpec::Uniform(Alignment::Left);
    let table = vec![
        RowEntry::row(["short", "1"]),
        RowEntry::row(["a much longer cell", "2"]),
    ];
    let lines = render_table(&table, "markdown", &opts).unwrap();
    let width = lines[0].chars().count();
    for line in &lines {
        assert_eq!(line.chars().count(), width, "line {:?}", line);
    }
}

// ============================================================
// LaTeX
// ============================================================

#[test]
fn latex_complete_snippet() {
    let table = vec![RowEntry::row([1, 2]), RowEntry::row([3, 4])];
    let mut opts = RenderOptions::with_head_row(["X", "Y"]);
    opts.caption = Some("T".to_string());
    let latex_opts = LatexOptions {
        label: Some("t1".to_string()),
        ..Default::default()
    };
    let lines = print_table_latex(&table, &opts, &latex_opts, &OutputOptions::silent()).unwrap();
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
            "3&4\\\\",
            "\\bottomrule",
            "\\end{tabular}",
        ]
    );
}

#[test]
fn latex_single_top_and_bottom_rule() {
    let table = vec![RowEntry::row([1])];
    let lines = print_table_latex(
        &table,
        &RenderOptions::default(),
        &LatexOptions::default(),
        &OutputOptions::silent(),
    )
    .unwrap();
    assert_eq!(lines.iter().filter(|l| *l == "\\toprule").count(), 1);
    assert_eq!(lines.iter().filter(|l| *l == "\\bottomrule").count(), 1);
}

#[test]
fn latex_per_column_format_mismatch_is_rejected() {
    let table = vec![RowEntry::row([1, 2])];
    let latex_opts = LatexOptions {
        column_format: ColumnFormat::PerColumn(vec!["r".to_string()]),
        ..Default::default()
    };
    let err = print_table_latex(
        &table,
        &RenderOptions::default(),
        &latex_opts,
        &OutputOptions::silent(),
    )
    .unwrap_err();
    assert!(matches!(err, TypesetError::InvalidColumnFormat { .. }));
}

// ============================================================
// Rule markers
// ============================================================

#[test]
fn extra_marker_collapses_the_automatic_mid() {
    let table = vec![
        RowEntry::row(["r1"]),
        RowEntry::Rule(Rule::Extra),
        RowEntry::row(["r2"]),
    ];
    let lines = render_table(&table, "csv", &RenderOptions::default()).unwrap();
    assert_eq!(lines, vec!["r1", "", "r2"]);
}

#[test]
fn multiline_cells_stay_one_logical_row() {
    let table = vec![RowEntry::row(["a\nb", "x"]), RowEntry::row(["c", "y"])];
    let lines = render_table(&table, "csv", &RenderOptions::default()).unwrap();
    assert_eq!(lines, vec!["a,x", "b,", "c,y"]);
}

#[test]
fn debug_style_names_every_rule() {
    let opts = RenderOptions::with_head_row(["H"]);
    let table = vec![RowEntry::row(["d"])];
    let lines = render_table(&table, "debug", &opts).unwrap();
    assert_eq!(
        lines,
        vec![
            "---Top---",
            "^> H <$",
            "---Head---",
            "^> d <$",
            "---Bottom---",
        ]
    );
}

// ============================================================
// Headers, formatting, transposition
// ============================================================

#[test]
fn head_column_and_top_left_corner() {
    let mut opts = RenderOptions::with_head_row(["A"]);
    opts.head_col = Some(HeadColumn::Labels(vec!["r1".to_string()]));
    opts.top_left = "id".to_string();
    let table = vec![RowEntry::row([7])];
    let lines = render_table(&table, "csv", &opts).unwrap();
    assert_eq!(lines, vec!["id,A", "r1,7"]);
}

#[test]
fn enumerated_head_column() {
    let mut opts = RenderOptions::default();
    opts.head_col = Some(HeadColumn::Enumerate);
    let lines = render_table(&sample_table(), "csv", &opts).unwrap();
    assert_eq!(lines, vec!["1,a,1", "2,b,2"]);
}

#[test]
fn transposed_body() {
    let mut opts = RenderOptions::default();
    opts.transpose_data = true;
    let table = vec![RowEntry::row([1, 2]), RowEntry::row([3, 4])];
    let lines = render_table(&table, "csv", &opts).unwrap();
    assert_eq!(lines, vec!["1,3", "2,4"]);
}

#[test]
fn formatter_with_nan_replacement() {
    let mut opts = RenderOptions::default();
    opts.formatter = Formatter::All(".2f".to_string());
    opts.replacement = Some(nan_dashes());
    let table = vec![RowEntry::row(vec![
        Value::Float(3.14159),
        Value::Float(f64::NAN),
    ])];
    let lines = render_table(&table, "csv", &opts).unwrap();
    assert_eq!(lines, vec!["3.14,\u{2014}"]);
}

#[test]
fn rendering_is_idempotent() {
    let mut opts = RenderOptions::with_head_row(["Name", "Val"]);
    opts.align = AlignSpec::Uniform(Alignment::Left);
    let first = render_table(&sample_table(), "markdown", &opts).unwrap();
    let second = render_table(&sample_table(), "markdown", &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ragged_rows_are_rejected() {
    let table = vec![RowEntry::row(["a"]), RowEntry::row(["b", "c"])];
    let err = render_table(&table, "csv", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, TypesetError::ShapeMismatch { .. }));
}

// ============================================================
// Style registry
// ============================================================

#[test]
fn registry_resolves_custom_style() {
    let mut registry = StyleRegistry::new();
    registry.register("semi", || Box::new(Csv::with_separator(";")));
    let style = registry.resolve("SEMI").unwrap();
    let lines = typeset(&sample_table(), style.as_ref(), &RenderOptions::default()).unwrap();
    assert_eq!(lines, vec!["a;1", "b;2"]);
}

#[test]
fn unknown_style_name_is_an_error() {
    let err = render_table(&sample_table(), "html", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, TypesetError::UnknownStyle { .. }));
}
