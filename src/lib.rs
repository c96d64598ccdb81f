//! Board, ship and tile model for a single-player text Battleship.
//!
//! The crate is `no_std` + `alloc` without the default `std` feature, which
//! adds the logger, serde derives and `std::error::Error` impls.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
pub mod config;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod tile;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
pub use tile::*;
