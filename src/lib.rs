#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod action;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod controller;
mod coordinate;
mod grid;
pub mod layout;
#[cfg(feature = "std")]
mod logging;
mod mark;
mod player;
pub mod prelude;
mod ship;
mod view;

pub use action::{is_location_free, place_ship, shoot, Occupancy};
pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::ConsoleView;
pub use controller::*;
pub use coordinate::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use mark::*;
pub use player::*;
pub use ship::*;
pub use view::*;
