use crate::mark::Mark;
use crate::ship::PartRef;

/// One grid slot: its mark and, once a ship is placed over it, the ship part
/// it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    mark: Mark,
    occupant: Option<PartRef>,
}

impl Cell {
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            occupant: None,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The ship part placed here. Kept after the part is hit.
    pub fn occupant(&self) -> Option<PartRef> {
        self.occupant
    }

    /// Overwrite the mark.
    ///
    /// When the cell currently shows `ShipPresent`, the occupying part is
    /// returned so the owner of the ship list can flag it damaged.
    #[must_use = "the returned part must be marked damaged"]
    pub fn set_mark(&mut self, mark: Mark) -> Option<PartRef> {
        let damaged = match self.mark {
            Mark::ShipPresent => self.occupant,
            _ => None,
        };
        self.mark = mark;
        damaged
    }

    /// Put a ship part on this cell; the mark becomes `ShipPresent`.
    pub fn set_ship_part(&mut self, part: PartRef) {
        self.occupant = Some(part);
        self.mark = Mark::ShipPresent;
    }
}
