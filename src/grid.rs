//! A player's battlefield: the cell matrix and the ships placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::Cell;
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::coordinate::Coordinate;
use crate::mark::Mark;
use crate::ship::{PartRef, Ship, ShipType};

/// Read-only snapshot of a grid's marks, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    height: usize,
    width: usize,
    marks: Vec<Mark>,
}

impl GridView {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Mark at `coordinate`.
    ///
    /// # Panics
    /// If the coordinate lies outside the snapshot.
    pub fn get(&self, coordinate: Coordinate) -> Mark {
        assert!(coordinate.row() < self.height && coordinate.col() < self.width);
        self.marks[coordinate.row() * self.width + coordinate.col()]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.marks.chunks(self.width)
    }

    /// Number of cells carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

/// Fixed-size matrix of cells plus the ships placed on it.
///
/// Ships live in a flat list; cells refer to their part by index, so there
/// are no references between cells and ships. None of the accessors check
/// bounds beyond panicking on an out-of-range coordinate.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Grid {
    /// Create a grid with every cell `Empty` and no ships.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::new(Mark::Empty); height * width],
            ships: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `coordinate` addresses a cell of this grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row() < self.height && coordinate.col() < self.width
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        assert!(
            self.contains(coordinate),
            "coordinate {:?} outside {}x{} grid",
            coordinate,
            self.height,
            self.width
        );
        coordinate.row() * self.width + coordinate.col()
    }

    pub fn cell_at(&self, coordinate: Coordinate) -> &Cell {
        &self.cells[self.index(coordinate)]
    }

    pub fn mark_at(&self, coordinate: Coordinate) -> Mark {
        self.cell_at(coordinate).mark()
    }

    /// Set the mark of a cell. If the cell showed `ShipPresent`, the ship
    /// part on it is damaged first.
    pub fn mark_cell(&mut self, coordinate: Coordinate, mark: Mark) {
        let idx = self.index(coordinate);
        if let Some(part) = self.cells[idx].set_mark(mark) {
            self.damage(part);
        }
    }

    fn damage(&mut self, part: PartRef) {
        if let Some(p) = self
            .ships
            .get_mut(part.ship)
            .and_then(|ship| ship.part_mut(part.part))
        {
            p.set_damaged();
        }
    }

    /// Build a ship over `coordinates` and record it. No legality checks are
    /// made here. Returns the ship's index in [`Grid::ships`].
    pub fn place_ship(&mut self, ship_type: ShipType, coordinates: &[Coordinate]) -> usize {
        let index = self.ships.len();
        let ship = Ship::new(ship_type, index, coordinates);
        for (part, coordinate) in ship.cells().enumerate() {
            let idx = self.index(coordinate);
            self.cells[idx].set_ship_part(PartRef { ship: index, part });
        }
        self.ships.push(ship);
        index
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// The ship with a part on `coordinate`, hit or not.
    pub fn ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        let part = self.cell_at(coordinate).occupant()?;
        self.ships.get(part.ship)
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// True marks, ships included.
    pub fn full_view(&self) -> GridView {
        GridView {
            height: self.height,
            width: self.width,
            marks: self.cells.iter().map(Cell::mark).collect(),
        }
    }

    /// Marks as the opponent sees them: undamaged ship parts read as `Empty`.
    pub fn fogged_view(&self) -> GridView {
        GridView {
            height: self.height,
            width: self.width,
            marks: self.cells.iter().map(|c| c.mark().fogged()).collect(),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_HEIGHT, GRID_WIDTH)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.height, self.width)?;
        for row in self.cells.chunks(self.width) {
            f.write_str("  ")?;
            for cell in row {
                write!(f, "{}", cell.mark().sign())?;
            }
            f.write_str("\n")?;
        }
        write!(f, "  ships: {:?}\n}}", self.ships)
    }
}
