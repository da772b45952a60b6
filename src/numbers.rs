use gridly::prelude::*;
use itertools::Itertools;
use thiserror::Error;

use crate::schematic::Schematic;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the number {digits} at row {row}, column {column} is too large")]
pub struct NumberOverflowError {
    pub row: isize,
    pub column: isize,
    pub digits: String,
}

/// A horizontal run of digits in the schematic, read as a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNumber {
    pub value: u32,

    /// The location of the leftmost digit
    pub root: Location,
    pub width: Columns,
}

impl GridNumber {
    pub fn row(&self) -> Row {
        self.root.row
    }

    pub fn columns(&self) -> ColumnRange {
        self.root.column.span(self.width)
    }

    /// All of the cells occupied by this number, from left to right.
    pub fn cells(&self) -> impl Iterator<Item = Location> {
        LocationRange::new(self.row(), self.columns()).into_iter()
    }
}

/// A run of digits that hasn't been parsed yet
#[derive(Debug)]
struct Run {
    root: Location,
    digits: String,
}

impl Run {
    fn finish(self) -> Result<GridNumber, NumberOverflowError> {
        // The run is nonempty and all ascii digits, so the only way for this
        // parse to fail is overflow
        match self.digits.parse() {
            Ok(value) => Ok(GridNumber {
                value,
                root: self.root,
                width: Columns(self.digits.len() as isize),
            }),
            Err(_) => Err(NumberOverflowError {
                row: self.root.row.0,
                column: self.root.column.0,
                digits: self.digits,
            }),
        }
    }
}

/// Find every number in a single row, from left to right.
fn extract_row(
    row: Vec<(Location, char)>,
) -> impl Iterator<Item = Result<GridNumber, NumberOverflowError>> {
    row.into_iter()
        .map(|(location, cell)| {
            cell.is_ascii_digit().then(|| Run {
                root: location,
                digits: cell.to_string(),
            })
        })
        // Merge each digit into the run to its left. Non-digit cells are
        // `None`, so they stop a run from growing.
        .coalesce(|run1, run2| match (run1, run2) {
            (Some(mut run1), Some(run2)) => {
                run1.digits.push_str(&run2.digits);
                Ok(Some(run1))
            }
            (run1, run2) => Err((run1, run2)),
        })
        .flatten()
        .map(Run::finish)
}

/// Find every number in the schematic, in reading order (top to bottom, left
/// to right). Every digit in the schematic belongs to exactly one number.
pub fn extract(schematic: &Schematic) -> Result<Vec<GridNumber>, NumberOverflowError> {
    schematic.rows().flat_map(extract_row).try_collect()
}
