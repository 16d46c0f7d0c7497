// Stateless game actions: ship placement and shot resolution.

use log::{debug, warn};

use crate::common::{PlacementError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::{Grid, GridView};
use crate::mark::Mark;
use crate::player::Player;
use crate::ship::{Ship, ShipType};

/// Place a ship of `ship_type` on the player's grid.
///
/// `coordinates` must already form a straight run of `ship_type.length()`
/// in-range cells; only the spacing rule is checked here. On error the grid
/// is left untouched.
pub fn place_ship(
    player: &mut Player,
    ship_type: ShipType,
    coordinates: &[Coordinate],
) -> Result<(), PlacementError> {
    if !is_location_free(player.grid(), coordinates) {
        warn!(
            "{}: rejected {} at {:?}",
            player.name(),
            ship_type.name(),
            coordinates
        );
        return Err(PlacementError::TooClose);
    }
    let index = player.grid_mut().place_ship(ship_type, coordinates);
    debug!(
        "{}: placed {} as ship #{} at {:?}",
        player.name(),
        ship_type.name(),
        index,
        coordinates
    );
    Ok(())
}

/// Anything the spacing rule can be checked against.
pub trait Occupancy {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    /// Whether the cell holds untouched water and no ship.
    fn is_free(&self, coordinate: Coordinate) -> bool;
}

impl Occupancy for Grid {
    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn is_free(&self, coordinate: Coordinate) -> bool {
        let cell = self.cell_at(coordinate);
        cell.mark() == Mark::Empty && cell.occupant().is_none()
    }
}

/// A full (unfogged) view is enough to place ships from the presentation
/// side, where only snapshots are available.
impl Occupancy for GridView {
    fn height(&self) -> usize {
        GridView::height(self)
    }

    fn width(&self) -> usize {
        GridView::width(self)
    }

    fn is_free(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == Mark::Empty
    }
}

/// Check that the ship's bounding box, widened by one cell on every side
/// and clamped to the grid, holds nothing but untouched water.
pub fn is_location_free<G: Occupancy + ?Sized>(grid: &G, coordinates: &[Coordinate]) -> bool {
    let (Some(first), Some(last)) = (coordinates.first(), coordinates.last()) else {
        return true;
    };
    if grid.height() == 0 || grid.width() == 0 {
        return false;
    }

    let top = first.row().min(last.row()).saturating_sub(1);
    let left = first.col().min(last.col()).saturating_sub(1);
    let bottom = (first.row().max(last.row()) + 1).min(grid.height() - 1);
    let right = (first.col().max(last.col()) + 1).min(grid.width() - 1);

    (top..=bottom).all(|row| (left..=right).all(|col| grid.is_free(Coordinate::new(row, col))))
}

/// Fire at `coordinate` on the target's grid.
///
/// A shot at a cell that was already resolved reports `Miss` and changes
/// nothing on a hit cell; water cells are (re)marked `Miss`.
pub fn shoot(target: &mut Player, coordinate: Coordinate) -> ShotResult {
    let grid = target.grid_mut();
    let result = match grid.mark_at(coordinate) {
        Mark::ShipPresent => {
            grid.mark_cell(coordinate, Mark::Hit);
            if grid.ship_at(coordinate).is_some_and(Ship::is_sunk) {
                ShotResult::Sank
            } else {
                ShotResult::Hit
            }
        }
        Mark::Hit => ShotResult::Miss,
        Mark::Empty | Mark::Miss => {
            grid.mark_cell(coordinate, Mark::Miss);
            ShotResult::Miss
        }
    };
    debug!("shot at {} on {}: {:?}", coordinate, target.name(), result);
    result
}
