use alloc::string::String;

use crate::coordinate::Coordinate;
use crate::grid::{Grid, GridView};
use crate::mark::Mark;
use crate::ship::Ship;

/// A named participant and the grid they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    grid: Grid,
}

impl Player {
    /// Create a player with an empty standard-size grid.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_grid(name, Grid::default())
    }

    pub fn with_grid(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn mark_at(&self, coordinate: Coordinate) -> Mark {
        self.grid.mark_at(coordinate)
    }

    pub fn ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        self.grid.ship_at(coordinate)
    }

    /// The player's own view of the grid.
    pub fn full_view(&self) -> GridView {
        self.grid.full_view()
    }

    /// The grid as an opponent may see it.
    pub fn fogged_view(&self) -> GridView {
        self.grid.fogged_view()
    }

    /// Whether every ship on the grid is sunk.
    ///
    /// Vacuously true before any ship is placed; only meaningful once setup
    /// is finished.
    pub fn has_lost(&self) -> bool {
        self.grid.all_sunk()
    }
}
