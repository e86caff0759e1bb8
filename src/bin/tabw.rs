//! tabw - typeset delimited data as CSV, TSV, Markdown or LaTeX tables

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use tabwrite::{
    nan_dashes, print_table, print_table_latex, AlignSpec, ColumnFormat, Formatter, HeadColumn,
    LatexOptions, OutputOptions, RenderOptions, RowEntry, Value,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabw")]
#[command(version)]
#[command(about = "Typeset delimited data as CSV, TSV, Markdown or LaTeX tables", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Table style: csv, tsv, markdown, latex or debug
    #[arg(short, long, default_value = "markdown")]
    style: String,

    /// Input field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Treat the first input line as the header row
    #[arg(long)]
    header: bool,

    /// Prepend an enumerating header column (1..N)
    #[arg(long)]
    enumerate: bool,

    /// Column alignment: one code for all columns or one per column,
    /// e.g. "l", "lcr" (l=left, c=center, r=right, n=none)
    #[arg(short, long)]
    align: Option<String>,

    /// Caption line printed above the table
    #[arg(short, long)]
    caption: Option<String>,

    /// Format template applied to every cell, e.g. ".2f"
    #[arg(short, long)]
    format: Option<String>,

    /// Transpose rows and columns of the data body
    #[arg(short, long)]
    transpose: bool,

    /// Suppress the rule after the header row
    #[arg(long)]
    no_head_rule: bool,

    /// Replace "nan" cells with an em-dash
    #[arg(long)]
    replace_nan: bool,

    /// LaTeX table label (latex style only)
    #[arg(long)]
    label: Option<String>,

    /// LaTeX column format, e.g. "l" or "S[table-format=2.2]"
    /// (latex style only)
    #[arg(long)]
    column_format: Option<String>,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut lines = input.lines().filter(|l| !l.trim().is_empty());

    let mut opts = RenderOptions::default();
    if cli.header {
        match lines.next() {
            Some(head) => {
                opts.head_row = Some(
                    head.split(cli.delimiter.as_str())
                        .map(str::to_string)
                        .collect(),
                );
            }
            None => {
                eprintln!("Error: --header given but input is empty");
                std::process::exit(1);
            }
        }
    }

    let table: Vec<RowEntry> = lines
        .map(|line| {
            RowEntry::Data(
                line.split(cli.delimiter.as_str())
                    .map(parse_cell)
                    .collect(),
            )
        })
        .collect();

    if cli.enumerate {
        opts.head_col = Some(HeadColumn::Enumerate);
    }
    if let Some(tokens) = &cli.align {
        opts.align = match AlignSpec::parse(tokens) {
            Ok(spec) => spec,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
    }
    opts.caption = cli.caption.clone();
    if let Some(template) = &cli.format {
        opts.formatter = Formatter::All(template.clone());
    }
    opts.transpose_data = cli.transpose;
    opts.omit_head_rule = cli.no_head_rule;
    if cli.replace_nan {
        opts.replacement = Some(nan_dashes());
    }

    let output = match &cli.output {
        Some(path) => OutputOptions::to_file(path),
        None => OutputOptions::shown(),
    };

    let result = if cli.style.eq_ignore_ascii_case("latex") {
        let latex_opts = LatexOptions {
            label: cli.label.clone(),
            column_format: cli
                .column_format
                .clone()
                .map_or_else(ColumnFormat::default, ColumnFormat::Uniform),
            table_head: None,
        };
        print_table_latex(&table, &opts, &latex_opts, &output)
    } else {
        print_table(&table, &cli.style, &opts, &output)
    };

    match result {
        Ok(_) => {
            if let Some(path) = &cli.output {
                eprintln!("✓ Output written to: {}", path);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Parse one cell: integer, then float, then plain text.
#[cfg(feature = "cli")]
fn parse_cell(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Str(trimmed.to_string())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabwrite --features cli");
    eprintln!("  tabw [OPTIONS] [INPUT_FILE]");
}
