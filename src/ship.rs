//! Ship definitions and per-part damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::coordinate::Coordinate;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cells)", self.name, self.length)
    }
}

/// Index of a ship part inside a grid's ship list: `ships[ship].parts[part]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartRef {
    pub ship: usize,
    pub part: usize,
}

/// One cell-sized piece of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPart {
    ship: usize,
    coordinate: Coordinate,
    damaged: bool,
}

impl ShipPart {
    /// Index of the owning ship in its grid's ship list.
    pub fn ship(&self) -> usize {
        self.ship
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn is_damaged(&self) -> bool {
        self.damaged
    }

    /// Flag the part as damaged. Calling this more than once has no further
    /// effect.
    pub fn set_damaged(&mut self) {
        self.damaged = true;
    }
}

/// A ship placed on a grid, owning its parts in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    parts: Vec<ShipPart>,
}

impl Ship {
    /// Build a ship with one undamaged part per coordinate.
    ///
    /// `index` is the slot the ship will occupy in its grid's ship list and
    /// is stored in every part as the back-reference.
    pub fn new(ship_type: ShipType, index: usize, coordinates: &[Coordinate]) -> Self {
        debug_assert_eq!(coordinates.len(), ship_type.length());
        let parts = coordinates
            .iter()
            .map(|&coordinate| ShipPart {
                ship: index,
                coordinate,
                damaged: false,
            })
            .collect();
        Self { ship_type, parts }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[ShipPart] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&ShipPart> {
        self.parts.get(index)
    }

    pub(crate) fn part_mut(&mut self, index: usize) -> Option<&mut ShipPart> {
        self.parts.get_mut(index)
    }

    /// Coordinates covered by the ship, in placement order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.parts.iter().map(ShipPart::coordinate)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells().any(|c| c == coordinate)
    }

    /// Number of parts that have been hit.
    pub fn damage(&self) -> usize {
        self.parts.iter().filter(|p| p.is_damaged()).count()
    }

    /// Check if the ship is sunk (all parts damaged).
    pub fn is_sunk(&self) -> bool {
        self.parts.iter().all(ShipPart::is_damaged)
    }
}
