//! Common types for the battlefield: shot results and error enums.

use core::fmt;

/// Result of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot landed in water.
    Miss,
    /// Shot struck the last undamaged part of a ship.
    Sank,
}

/// Errors returned when placing a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship overlaps another ship or touches it, diagonals included.
    TooClose,
    /// No legal random placement was found.
    UnableToPlaceShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::TooClose => write!(f, "You placed it too close to another one."),
            PlacementError::UnableToPlaceShip => write!(f, "Unable to find a free spot for the ship."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Errors raised while turning user input into coordinates. These never reach
/// the game core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not a `<letter><number>` coordinate.
    WrongCoordinate,
    /// Coordinate is outside the grid.
    OutOfBounds,
    /// Placement input did not contain exactly two endpoints.
    WrongEndpointCount,
    /// Shot input did not contain exactly one coordinate.
    WrongShotCount,
    /// Endpoints share neither a row nor a column.
    WrongLocation,
    /// Endpoints span the wrong number of cells for the named ship.
    WrongLength(&'static str),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCoordinate => write!(f, "Wrong coordinate!"),
            InputError::OutOfBounds => write!(f, "The coordinate is outside the field!"),
            InputError::WrongEndpointCount => write!(
                f,
                "The coordinates must contain only the start and end points of the ship."
            ),
            InputError::WrongShotCount => write!(f, "Enter only one coordinate."),
            InputError::WrongLocation => write!(f, "Wrong ship location!"),
            InputError::WrongLength(name) => write!(f, "Wrong length of the {}!", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
