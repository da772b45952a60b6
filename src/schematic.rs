use std::fmt::{self, Display, Formatter};

use gridly::prelude::*;
use gridly_grids::VecGrid;
use joinery::{separators::Newline, JoinableIterator};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGridError {
    #[error("the schematic has no rows")]
    Empty,

    #[error("the first row of the schematic is empty")]
    ZeroWidth,

    #[error("row {row} is {found} characters wide, but the schematic is {expected} wide")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An engine schematic: a rectangular grid of characters, at least one cell
/// in each dimension.
#[derive(Debug, Clone)]
pub struct Schematic {
    grid: VecGrid<char>,
}

impl Schematic {
    /// Build a schematic from its rows. The dimensions are checked before the
    /// grid is built, so a ragged schematic is rejected up front.
    pub fn from_lines<I>(lines: I) -> Result<Self, InvalidGridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();

        let expected = rows.first().ok_or(InvalidGridError::Empty)?.len();

        if expected == 0 {
            return Err(InvalidGridError::ZeroWidth);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|&(_, width)| width != expected)
        {
            return Err(InvalidGridError::Ragged {
                row,
                expected,
                found,
            });
        }

        let grid = VecGrid::new_from_rows(rows.into_iter().map(|row| row.into_iter()))
            .expect("rows were already checked to be the same nonzero width");

        Ok(Schematic { grid })
    }

    /// Get the character at a location, or `None` if it's outside the grid.
    pub fn get(&self, location: Location) -> Option<char> {
        self.grid.get(location).ok().copied()
    }

    /// Iterate over every row, as a sequence of locations and characters.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(Location, char)>> + '_ {
        let dimensions = self.grid.dimensions();

        (0..dimensions.rows.0).map(Row).map(move |row| {
            (0..dimensions.columns.0)
                .map(Column)
                .map(|column| row + column)
                .filter_map(|location| self.get(location).map(|cell| (location, cell)))
                .collect()
        })
    }

    pub fn height(&self) -> usize {
        self.grid.dimensions().rows.0 as usize
    }

    pub fn width(&self) -> usize {
        self.grid.dimensions().columns.0 as usize
    }
}

impl TryFrom<&str> for Schematic {
    type Error = InvalidGridError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Only line terminators are stripped; trailing spaces are real cells
        Self::from_lines(value.trim_end_matches(&['\n', '\r'][..]).lines())
    }
}

impl Display for Schematic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .rows()
            .map(|row| row.into_iter().map(|(_, cell)| cell).collect())
            .collect();

        write!(f, "{}", lines.iter().join_with(Newline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_grid() {
        let schematic = Schematic::from_lines(["467..", "...*.", "..35."]).unwrap();

        assert_eq!(schematic.height(), 3);
        assert_eq!(schematic.width(), 5);
        assert_eq!(schematic.get(Row(1) + Column(3)), Some('*'));
        assert_eq!(schematic.get(Row(0) + Column(0)), Some('4'));
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let schematic = Schematic::from_lines(["1*1"]).unwrap();

        assert_eq!(schematic.get(Row(-1) + Column(0)), None);
        assert_eq!(schematic.get(Row(0) + Column(-1)), None);
        assert_eq!(schematic.get(Row(1) + Column(0)), None);
        assert_eq!(schematic.get(Row(0) + Column(3)), None);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];

        assert_eq!(
            Schematic::from_lines(lines).unwrap_err(),
            InvalidGridError::Empty
        );
        assert_eq!(
            Schematic::try_from("").unwrap_err(),
            InvalidGridError::Empty
        );
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(
            Schematic::from_lines(["", ""]).unwrap_err(),
            InvalidGridError::ZeroWidth
        );
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            Schematic::from_lines(["...", "..", "...."]).unwrap_err(),
            InvalidGridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_trailing_newlines_are_ignored() {
        let schematic = Schematic::try_from("12.\r\n.*.\r\n\n").unwrap();

        assert_eq!(schematic.height(), 2);
        assert_eq!(schematic.width(), 3);
    }

    #[test]
    fn test_leading_whitespace_is_a_cell() {
        let schematic = Schematic::try_from("*..\n .1\n...").unwrap();

        assert_eq!(schematic.width(), 3);
        assert_eq!(schematic.get(Row(1) + Column(0)), Some(' '));
    }

    #[test]
    fn test_display_round_trips_rows() {
        let text = "467..\n...*.\n..35.";
        let schematic = Schematic::try_from(text).unwrap();

        assert_eq!(schematic.to_string(), text);
    }
}
