/// Visible state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Untouched water, or a ship hidden by fog.
    #[default]
    Empty,
    /// A ship part that has been struck.
    Hit,
    /// A shot that landed in water.
    Miss,
    /// An undamaged ship part.
    ShipPresent,
}

impl Mark {
    /// Character used when the mark is drawn on a text grid.
    pub fn sign(self) -> char {
        match self {
            Mark::Empty => '~',
            Mark::Hit => 'X',
            Mark::Miss => 'M',
            Mark::ShipPresent => 'O',
        }
    }

    /// The mark an opponent is allowed to see.
    pub fn fogged(self) -> Mark {
        match self {
            Mark::ShipPresent => Mark::Empty,
            other => other,
        }
    }
}
