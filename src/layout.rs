//! Helpers that turn user-level input into ship coordinates: parsing `A1`
//! style labels, expanding a pair of endpoints into a full run, and finding
//! a random legal spot for a ship.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::action::{is_location_free, Occupancy};
use crate::common::{InputError, PlacementError};
use crate::coordinate::Coordinate;
use crate::ship::ShipType;

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Parse a `<ROW LETTER><COLUMN NUMBER>` label such as `A1` or `j10` into a
/// coordinate on a `height × width` grid.
pub fn parse_coordinate(input: &str, height: usize, width: usize) -> Result<Coordinate, InputError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or(InputError::WrongCoordinate)?
        .to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(InputError::WrongCoordinate);
    }
    let row = (row_ch as u8 - b'A') as usize;
    let col_str: String = chars.collect();
    let col: usize = col_str.parse().map_err(|_| InputError::WrongCoordinate)?;
    if col == 0 || col > width || row >= height {
        return Err(InputError::OutOfBounds);
    }
    Ok(Coordinate::new(row, col - 1))
}

/// Expand two endpoints into the coordinates of a straight ship.
///
/// The endpoints may come in either order; the result always runs from the
/// smaller one to the larger one and has exactly `ship_type.length()` cells.
pub fn ship_coordinates(
    ship_type: ShipType,
    a: Coordinate,
    b: Coordinate,
) -> Result<Vec<Coordinate>, InputError> {
    let len = ship_type.length();
    if a.col() == b.col() {
        let start = a.row().min(b.row());
        if a.row().abs_diff(b.row()) + 1 != len {
            return Err(InputError::WrongLength(ship_type.name()));
        }
        Ok((start..start + len).map(|r| Coordinate::new(r, a.col())).collect())
    } else if a.row() == b.row() {
        let start = a.col().min(b.col());
        if a.col().abs_diff(b.col()) + 1 != len {
            return Err(InputError::WrongLength(ship_type.name()));
        }
        Ok((start..start + len).map(|c| Coordinate::new(a.row(), c)).collect())
    } else {
        Err(InputError::WrongLocation)
    }
}

/// Pick a random straight placement for `ship_type` that respects the
/// spacing rule on `grid`, giving up after a fixed number of attempts.
pub fn random_placement<G: Occupancy + ?Sized, R: Rng + ?Sized>(
    grid: &G,
    ship_type: ShipType,
    rng: &mut R,
) -> Result<Vec<Coordinate>, PlacementError> {
    let len = ship_type.length();
    if len == 0 || (len > grid.height() && len > grid.width()) {
        return Err(PlacementError::UnableToPlaceShip);
    }
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let vertical = if len > grid.width() {
            true
        } else if len > grid.height() {
            false
        } else {
            rng.random::<bool>()
        };
        let (max_r, max_c) = if vertical {
            (grid.height() - len, grid.width() - 1)
        } else {
            (grid.height() - 1, grid.width() - len)
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let coordinates: Vec<Coordinate> = (0..len)
            .map(|i| {
                if vertical {
                    Coordinate::new(r + i, c)
                } else {
                    Coordinate::new(r, c + i)
                }
            })
            .collect();
        if is_location_free(grid, &coordinates) {
            return Ok(coordinates);
        }
    }
    Err(PlacementError::UnableToPlaceShip)
}
