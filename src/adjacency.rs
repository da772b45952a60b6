use gridly::prelude::*;

use crate::{
    numbers::{extract, GridNumber, NumberOverflowError},
    schematic::Schematic,
};

/// The character used for empty space in the schematic
pub const FILLER: char = '.';

/// Symbols are anything other than filler, digits, letters, or whitespace.
pub fn is_symbol(c: char) -> bool {
    c != FILLER && !c.is_ascii_digit() && !c.is_alphabetic() && !c.is_whitespace()
}

/// Create an iterator over all the locations (including diagonals) that are
/// adjacent to the rectangle described by the root and the width:
///
/// ```text
/// aaaaaa
/// ar...a
/// aaaaaa
/// ```
///
/// given that `r` is the `root`, and `.` is the locations to its right in the
/// width, return all of the `a` locations, in an unspecified order. Some of
/// them may be outside of the grid.
fn compute_adjacencies(root: Location, width: Columns) -> impl Iterator<Item = Location> {
    let left_spot = root.step(Left);
    let above = left_spot.step(Up);
    let below = left_spot.step(Down);

    let row_above = LocationRange::new(above.row, above.column.span(width + Columns(2)));
    let row_below = LocationRange::new(below.row, below.column.span(width + Columns(2)));

    let right_spot = left_spot + width + Right;

    [row_above, row_below]
        .into_iter()
        .flatten()
        .chain([left_spot, right_spot])
}

/// A number is adjacent if there's a symbol anywhere in the ring of cells
/// around it. Cells outside of the schematic are ignored.
pub fn is_adjacent(schematic: &Schematic, number: &GridNumber) -> bool {
    compute_adjacencies(number.root, number.width)
        .filter_map(|location| schematic.get(location))
        .any(is_symbol)
}

pub fn adjacent_numbers<'a>(
    schematic: &'a Schematic,
    numbers: &'a [GridNumber],
) -> impl Iterator<Item = &'a GridNumber> + 'a {
    numbers
        .iter()
        .filter(move |number| is_adjacent(schematic, number))
}

/// Sum all of the numbers in the schematic that are adjacent to a symbol.
pub fn sum_adjacent(schematic: &Schematic) -> Result<u64, NumberOverflowError> {
    let numbers = extract(schematic)?;

    Ok(adjacent_numbers(schematic, &numbers)
        .map(|number| u64::from(number.value))
        .sum())
}
