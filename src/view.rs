use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{PlacementError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::GridView;
use crate::ship::ShipType;

/// Capabilities the controller needs from a presentation layer.
///
/// A view supplies player input and displays game events. It never mutates
/// game state itself; the controller applies everything it returns. Input
/// handed back must be well formed: placement coordinates are a straight,
/// in-range run of the requested length and shot coordinates are in range.
pub trait GameView {
    /// Name of the next player to register. `registered` players exist so far.
    fn prompt_for_player(&mut self, registered: usize) -> anyhow::Result<String>;

    /// Announce that `player` is about to place their fleet.
    fn prompt_for_ships_placement(&mut self, _player: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Coordinates for the next ship. `grid` is the player's own full view.
    fn prompt_for_ship_coordinates(
        &mut self,
        player: &str,
        ship_type: ShipType,
        grid: &GridView,
    ) -> anyhow::Result<Vec<Coordinate>>;

    /// A placement was rejected; the next call to
    /// [`GameView::prompt_for_ship_coordinates`] asks for the same ship again.
    fn show_placement_error(&mut self, error: &PlacementError) -> anyhow::Result<()>;

    /// Target for `player`'s next shot.
    fn prompt_for_shot(&mut self, player: &str) -> anyhow::Result<Coordinate>;

    fn show_shot_result(&mut self, result: ShotResult) -> anyhow::Result<()>;

    fn show_winner(&mut self, player: &str) -> anyhow::Result<()>;

    fn show_grid(&mut self, grid: &GridView) -> anyhow::Result<()>;

    /// Show the enemy's fogged grid above the current player's own grid.
    fn show_grids(&mut self, enemy: &GridView, own: &GridView) -> anyhow::Result<()>;

    /// Blocking hand-over between players.
    fn prompt_for_another_player(&mut self) -> anyhow::Result<()>;
}
