//! Rule markers: sentinels for horizontal separators in a table
//!
//! A rule marker stands in place of a row and signals "draw a separator
//! here" instead of data. Markers carry a priority so that two markers
//! meeting at the same position can be resolved without stacking.

use std::cmp::Ordering;

/// Horizontal rule marker.
///
/// Most markers are placed automatically during typesetting; `Extra` is
/// the one a caller may sparingly insert between two rows, and `No`
/// suppresses the separator that would otherwise be drawn (used between
/// the sub-rows of a split multi-line row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Opens the table, above the first row.
    Top,
    /// Closes the table, below the last row.
    Bottom,
    /// Draw nothing here, overriding an automatic separator.
    No,
    /// Separates the header row from the table body.
    Head,
    /// Caller-inserted separator between two body rows.
    Extra,
    /// Automatic separator between adjacent body rows.
    Mid,
}

impl Rule {
    /// Priority of this marker; lower is more significant.
    ///
    /// When two markers end up adjacent after normalization, only the one
    /// with the lower priority value is kept.
    pub fn priority(self) -> u8 {
        match self {
            Rule::Top => 0,
            Rule::Bottom => 1,
            Rule::No => 2,
            Rule::Head => 3,
            Rule::Extra => 4,
            Rule::Mid => 5,
        }
    }

    /// Marker name, as stamped into the output by the debug style.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Top => "Top",
            Rule::Bottom => "Bottom",
            Rule::No => "No",
            Rule::Head => "Head",
            Rule::Extra => "Extra",
            Rule::Mid => "Mid",
        }
    }
}

impl PartialOrd for Rule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}
