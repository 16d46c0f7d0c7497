//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coordinate, GameController, GameView, Grid, GridView, Mark, Phase, PlacementError, Player,
    ShipType, ShotResult, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleView};
