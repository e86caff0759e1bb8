//! Rendering options for table typesetting
//!
//! All knobs of a single typesetting call live in [`RenderOptions`],
//! constructed via `Default` and adjusted field by field. Options are
//! read-only during the call; no state survives between calls.

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::utils::error::{TypesetError, TypesetResult};

/// Per-column text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    /// No padding is performed for this column.
    None,
}

impl Alignment {
    /// Parse a single alignment token.
    ///
    /// Accepts the short codes `"l"`, `"c"`, `"r"` and `""`/`"n"` as well
    /// as the spelled-out names, case-insensitively.
    pub fn from_token(token: &str) -> TypesetResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Alignment::Left),
            "c" | "center" => Ok(Alignment::Center),
            "r" | "right" => Ok(Alignment::Right),
            "" | "n" | "none" => Ok(Alignment::None),
            _ => Err(TypesetError::invalid_alignment(token)),
        }
    }
}

/// Alignment specification: one value for all columns, or one per column.
///
/// A per-column list covers the final columns of the table, header column
/// included; missing entries default to [`Alignment::Left`].
#[derive(Debug, Clone, PartialEq)]
pub enum AlignSpec {
    Uniform(Alignment),
    PerColumn(Vec<Alignment>),
}

impl Default for AlignSpec {
    fn default() -> Self {
        // No padding by default: delimited output stays minimal unless
        // the caller asks for column alignment.
        AlignSpec::Uniform(Alignment::None)
    }
}

impl AlignSpec {
    /// Parse a compact token string: a single code applies to all
    /// columns, a multi-character string gives one code per column
    /// (e.g. `"lcr"`).
    pub fn parse(tokens: &str) -> TypesetResult<Self> {
        let mut aligns = Vec::new();
        for ch in tokens.chars() {
            aligns.push(Alignment::from_token(&ch.to_string())?);
        }
        match aligns.len() {
            0 => Ok(AlignSpec::Uniform(Alignment::None)),
            1 => Ok(AlignSpec::Uniform(aligns[0])),
            _ => Ok(AlignSpec::PerColumn(aligns)),
        }
    }

    /// Resolve into exactly one alignment per column.
    ///
    /// Uniform values are broadcast; short per-column lists are filled
    /// with [`Alignment::Left`], longer ones are truncated.
    pub fn resolve(&self, columns: usize) -> Vec<Alignment> {
        match self {
            AlignSpec::Uniform(a) => vec![*a; columns],
            AlignSpec::PerColumn(list) => {
                let mut aligns = list.clone();
                aligns.resize(columns, Alignment::Left);
                aligns.truncate(columns);
                aligns
            }
        }
    }
}

/// Cell format templates, following the positional-field mini-language
/// (see [`crate::core::format`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Formatter {
    /// No formatting; every cell uses its plain text conversion.
    #[default]
    None,
    /// One template, broadcast to all cells.
    All(String),
    /// One template per column, reused for every row.
    PerColumn(Vec<String>),
    /// One template per cell.
    PerCell(Vec<Vec<String>>),
}

impl Formatter {
    /// Template for the cell at `(row, col)`; empty means unformatted.
    pub(crate) fn template_for(&self, row: usize, col: usize) -> &str {
        match self {
            Formatter::None => "",
            Formatter::All(t) => t,
            Formatter::PerColumn(cols) => cols.get(col).map_or("", String::as_str),
            Formatter::PerCell(grid) => grid
                .get(row)
                .and_then(|r| r.get(col))
                .map_or("", String::as_str),
        }
    }
}

/// Header column specification: explicit row titles, or 1..N enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadColumn {
    Labels(Vec<String>),
    Enumerate,
}

/// Options for one typesetting call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Column titles, printed as the first row.
    pub head_row: Option<Vec<String>>,
    /// Row titles, printed as the first column.
    pub head_col: Option<HeadColumn>,
    /// Top-left corner cell, used when both header row and column exist.
    pub top_left: String,
    /// Column alignment specification.
    pub align: AlignSpec,
    /// Caption line printed directly above the table.
    pub caption: Option<String>,
    /// Cell format templates.
    pub formatter: Formatter,
    /// Exact-match replacement applied to formatted cell text.
    pub replacement: Option<IndexMap<String, String>>,
    /// Suppress the automatic head rule after the header row.
    pub omit_head_rule: bool,
    /// Transpose the data body before typesetting. Header row and
    /// header column are not swapped.
    pub transpose_data: bool,
}

impl RenderOptions {
    /// Options with a header row, the most common case.
    pub fn with_head_row<I>(titles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        RenderOptions {
            head_row: Some(titles.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

lazy_static! {
    static ref NAN_DASHES: IndexMap<String, String> = {
        let mut m = IndexMap::new();
        m.insert("nan".to_string(), "\u{2014}".to_string());
        m.insert("-nan".to_string(), "\u{2014}".to_string());
        m
    };
}

/// Replacement map turning `nan` cells into em-dashes.
pub fn nan_dashes() -> IndexMap<String, String> {
    NAN_DASHES.clone()
}

/// Apply a replacement map to every cell of a formatted grid.
///
/// Replacement is exact-match on the whole cell text.
pub fn replace(grid: &mut [Vec<String>], replacement: &IndexMap<String, String>) {
    for row in grid {
        for cell in row {
            if let Some(target) = replacement.get(cell.as_str()) {
                *cell = target.clone();
            }
        }
    }
}
