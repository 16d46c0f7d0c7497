#![cfg(feature = "std")]

//! Text console implementation of [`GameView`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::common::{InputError, PlacementError, ShotResult};
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::coordinate::Coordinate;
use crate::grid::GridView;
use crate::layout::{parse_coordinate, random_placement, ship_coordinates};
use crate::ship::ShipType;
use crate::view::GameView;

const SEPARATOR: &str = "---------------------";

/// Console front end reading commands from `R` and drawing to `W`.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
    names: Vec<String>,
    rng: SmallRng,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    /// View bound to the process's stdin and stdout.
    pub fn stdio(names: Vec<String>, rng: SmallRng) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), names, rng)
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    /// `names` are handed out in order when players register; missing
    /// entries fall back to `Player <n>`. `rng` drives random placement.
    pub fn new(input: R, output: W, names: Vec<String>, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            names,
            rng,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    fn print_error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "Error! {} Try again:", message)
    }

    fn read_ship_coordinates(
        &mut self,
        ship_type: ShipType,
        grid: &GridView,
    ) -> anyhow::Result<Result<Vec<Coordinate>, String>> {
        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(random_placement(grid, ship_type, &mut self.rng).map_err(|e| e.to_string()));
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parsed = match tokens.as_slice() {
            [a, b] => parse_coordinate(a, grid.height(), grid.width()).and_then(|a| {
                let b = parse_coordinate(b, grid.height(), grid.width())?;
                ship_coordinates(ship_type, a, b)
            }),
            _ => Err(InputError::WrongEndpointCount),
        };
        Ok(parsed.map_err(|e| e.to_string()))
    }

    fn render(&mut self, grid: &GridView) -> io::Result<()> {
        let header: Vec<String> = (1..=grid.width()).map(|c| c.to_string()).collect();
        writeln!(self.output, "  {}", header.join(" "))?;
        for (r, row) in grid.rows().enumerate() {
            let signs: Vec<String> = row.iter().map(|m| m.sign().to_string()).collect();
            writeln!(self.output, "{} {}", (b'A' + r as u8) as char, signs.join(" "))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> GameView for ConsoleView<R, W> {
    fn prompt_for_player(&mut self, registered: usize) -> anyhow::Result<String> {
        Ok(self
            .names
            .get(registered)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", registered + 1)))
    }

    fn prompt_for_ships_placement(&mut self, player: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}, place your ships on the game field", player)?;
        Ok(())
    }

    fn prompt_for_ship_coordinates(
        &mut self,
        _player: &str,
        ship_type: ShipType,
        grid: &GridView,
    ) -> anyhow::Result<Vec<Coordinate>> {
        writeln!(
            self.output,
            "\nEnter the coordinates of the {} ({} cells):",
            ship_type.name(),
            ship_type.length()
        )?;
        loop {
            match self.read_ship_coordinates(ship_type, grid)? {
                Ok(coordinates) => return Ok(coordinates),
                Err(message) => self.print_error(message)?,
            }
        }
    }

    fn show_placement_error(&mut self, error: &PlacementError) -> anyhow::Result<()> {
        self.print_error(error)?;
        Ok(())
    }

    fn prompt_for_shot(&mut self, player: &str) -> anyhow::Result<Coordinate> {
        writeln!(self.output, "\n{}, it's your turn:", player)?;
        loop {
            let line = self.read_line()?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let parsed = match tokens.as_slice() {
                [single] => parse_coordinate(single, GRID_HEIGHT, GRID_WIDTH),
                _ => Err(InputError::WrongShotCount),
            };
            match parsed {
                Ok(target) => return Ok(target),
                Err(e) => self.print_error(e)?,
            }
        }
    }

    fn show_shot_result(&mut self, result: ShotResult) -> anyhow::Result<()> {
        let message = match result {
            ShotResult::Hit => "You hit a ship!",
            ShotResult::Miss => "You missed!",
            ShotResult::Sank => "You sank a ship!",
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn show_winner(&mut self, player: &str) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "You sank the last ship. {} won. Congratulations!",
            player
        )?;
        Ok(())
    }

    fn show_grid(&mut self, grid: &GridView) -> anyhow::Result<()> {
        self.render(grid)?;
        Ok(())
    }

    fn show_grids(&mut self, enemy: &GridView, own: &GridView) -> anyhow::Result<()> {
        self.render(enemy)?;
        writeln!(self.output, "{}", SEPARATOR)?;
        self.render(own)?;
        Ok(())
    }

    fn prompt_for_another_player(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Press Enter and pass the move to another player")?;
        writeln!(self.output, "...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}
