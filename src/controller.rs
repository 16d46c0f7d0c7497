//! Match orchestration: the phase state machine driving two players from
//! registration through fleet placement to the final shot.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;

use log::{debug, info};

use crate::action;
use crate::common::{PlacementError, ShotResult};
use crate::config::{FLEET, NUM_PLAYERS};
use crate::coordinate::Coordinate;
use crate::player::Player;
use crate::ship::ShipType;
use crate::view::GameView;

/// Stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    CreatePlayers,
    PlaceShips,
    PerformShot,
    EndGame,
}

/// Something that happened during the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A player joined; `count` players are now registered.
    PlayerRegistered { count: usize },
    /// A player finished placing the fleet.
    FleetPlaced { last_player: bool },
    /// A shot was resolved against the enemy grid.
    ShotResolved { enemy_lost: bool },
}

impl Phase {
    /// Pure transition function. Events that do not apply to the current
    /// phase leave it unchanged.
    pub fn next(self, event: Event) -> Phase {
        match (self, event) {
            (Phase::CreatePlayers, Event::PlayerRegistered { count }) if count == NUM_PLAYERS => {
                Phase::PlaceShips
            }
            (Phase::PlaceShips, Event::FleetPlaced { last_player: true }) => Phase::PerformShot,
            (Phase::PerformShot, Event::ShotResolved { enemy_lost: true }) => Phase::EndGame,
            (phase, _) => phase,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::EndGame
    }
}

/// One resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: String,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Outcome of a match, suitable for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Option<String>,
    pub shots: Vec<ShotRecord>,
}

/// Runs a two-player match against a [`GameView`].
pub struct GameController<V: GameView> {
    view: V,
    players: Vec<Player>,
    current: usize,
    enemy: usize,
    phase: Phase,
    winner: Option<usize>,
    history: Vec<ShotRecord>,
}

impl<V: GameView> GameController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            players: Vec::with_capacity(NUM_PLAYERS),
            current: 0,
            enemy: 1,
            phase: Phase::CreatePlayers,
            winner: None,
            history: Vec::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn enemy_player(&self) -> Option<&Player> {
        self.players.get(self.enemy)
    }

    /// The player who sank the opponent's last ship, once the match is over.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|i| self.players.get(i))
    }

    /// Every shot fired so far, in order.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.winner().map(|p| p.name().to_string()),
            shots: self.history.clone(),
        }
    }

    /// Drive the match until it ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(())
    }

    /// Execute one round of the current phase.
    pub fn step(&mut self) -> anyhow::Result<()> {
        match self.phase {
            Phase::CreatePlayers => self.create_player(),
            Phase::PlaceShips => self.place_fleet(),
            Phase::PerformShot => self.play_turn(),
            Phase::EndGame => Ok(()),
        }
    }

    /// Add a player to the roster. Once two players are registered the first
    /// becomes current and the second the enemy.
    pub fn register_player(&mut self, name: impl Into<String>) {
        debug_assert!(self.players.len() < NUM_PLAYERS);
        let player = Player::new(name);
        info!("registered player {}", player.name());
        self.players.push(player);
        self.transition(Event::PlayerRegistered {
            count: self.players.len(),
        });
        if self.phase == Phase::PlaceShips {
            self.current = 0;
            self.enemy = 1;
        }
    }

    /// Place a ship for the current player.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        coordinates: &[Coordinate],
    ) -> Result<(), PlacementError> {
        action::place_ship(&mut self.players[self.current], ship_type, coordinates)
    }

    /// Fire the current player's shot at the enemy grid and report it. Ends
    /// the match if the enemy has no ship left, otherwise hands the turn
    /// over.
    pub fn perform_shot(&mut self, coordinate: Coordinate) -> anyhow::Result<ShotResult> {
        let result = action::shoot(&mut self.players[self.enemy], coordinate);
        self.history.push(ShotRecord {
            shooter: self.players[self.current].name().to_string(),
            target: coordinate,
            result,
        });

        let enemy_lost = self.players[self.enemy].has_lost();
        self.transition(Event::ShotResolved { enemy_lost });
        if enemy_lost {
            self.winner = Some(self.current);
            let winner = self.players[self.current].name();
            info!("{} won after {} shots", winner, self.history.len());
            self.view.show_grids(
                &self.players[self.enemy].fogged_view(),
                &self.players[self.current].full_view(),
            )?;
            self.view.show_winner(winner)?;
        } else {
            self.view.show_shot_result(result)?;
            self.view.prompt_for_another_player()?;
            self.swap_current_player();
        }
        Ok(result)
    }

    /// Exchange the current and enemy players.
    pub fn swap_current_player(&mut self) {
        mem::swap(&mut self.current, &mut self.enemy);
        debug!("turn passes to player #{}", self.current);
    }

    fn transition(&mut self, event: Event) {
        let next = self.phase.next(event);
        if next != self.phase {
            info!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    fn create_player(&mut self) -> anyhow::Result<()> {
        let name = self.view.prompt_for_player(self.players.len())?;
        self.register_player(name);
        Ok(())
    }

    fn place_fleet(&mut self) -> anyhow::Result<()> {
        let name = self.players[self.current].name().to_string();
        self.view.prompt_for_ships_placement(&name)?;
        self.view.show_grid(&self.players[self.current].full_view())?;

        for ship_type in FLEET {
            loop {
                let grid = self.players[self.current].full_view();
                let coordinates = self
                    .view
                    .prompt_for_ship_coordinates(&name, ship_type, &grid)?;
                match self.place_ship(ship_type, &coordinates) {
                    Ok(()) => break,
                    Err(e) => self.view.show_placement_error(&e)?,
                }
            }
            self.view.show_grid(&self.players[self.current].full_view())?;
        }

        let last_player = self.current + 1 == self.players.len();
        self.transition(Event::FleetPlaced { last_player });
        self.view.prompt_for_another_player()?;
        self.swap_current_player();
        Ok(())
    }

    fn play_turn(&mut self) -> anyhow::Result<()> {
        self.view.show_grids(
            &self.players[self.enemy].fogged_view(),
            &self.players[self.current].full_view(),
        )?;
        let name = self.players[self.current].name().to_string();
        let target = self.view.prompt_for_shot(&name)?;
        self.perform_shot(target)?;
        Ok(())
    }
}
