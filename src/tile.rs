//! Single board cell state.

use crate::common::{BoardError, Position};
use crate::ship::Ship;

/// Symbol of an ocean tile that has not been fired at.
pub const OCEAN: char = '.';
/// Symbol of an ocean tile that was fired at.
pub const MISS: char = 'o';
/// Symbol of a hit segment of a ship still afloat.
pub const HIT: char = '*';
/// Symbol of every segment of a sunk ship.
pub const SUNK: char = 'X';

/// One cell of the board, either ocean or a segment of a ship.
///
/// The tile does not point at its ship; the owning `Board` resolves that
/// through the cell's ship handle. See [`TileView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    hit: bool,
    ship: bool,
}

impl Tile {
    /// A fresh, unhit ocean tile.
    pub fn ocean(position: Position) -> Self {
        Self {
            position,
            hit: false,
            ship: false,
        }
    }

    pub(crate) fn ship_segment(position: Position) -> Self {
        Self {
            position,
            hit: false,
            ship: true,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn was_hit(&self) -> bool {
        self.hit
    }

    /// Mark the tile as hit.
    pub fn take_hit(&mut self) {
        self.hit = true;
    }

    pub fn is_ship(&self) -> bool {
        self.ship
    }

    /// Display symbol for this tile, given the ship that owns it (if any).
    ///
    /// Sunk state is recomputed from `owner` on every call.
    pub fn display_symbol(&self, owner: Option<&Ship>) -> char {
        debug_assert!(owner.is_some() || !self.ship, "ship tile rendered without its ship");
        match owner {
            Some(ship) if self.ship => {
                if ship.is_sunk() {
                    SUNK
                } else if self.hit {
                    HIT
                } else {
                    ship.initial()
                }
            }
            _ if self.hit => MISS,
            _ => OCEAN,
        }
    }
}

/// A tile on a board joined with the ship that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    tile: &'a Tile,
    owner: Option<&'a Ship>,
}

impl<'a> TileView<'a> {
    pub(crate) fn new(tile: &'a Tile, owner: Option<&'a Ship>) -> Self {
        Self { tile, owner }
    }

    pub fn tile(&self) -> &'a Tile {
        self.tile
    }

    pub fn position(&self) -> Position {
        self.tile.position()
    }

    pub fn was_hit(&self) -> bool {
        self.tile.was_hit()
    }

    pub fn is_ship(&self) -> bool {
        self.owner.is_some()
    }

    /// Owning ship, `None` for ocean.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.owner
    }

    pub fn display_symbol(&self) -> char {
        self.tile.display_symbol(self.owner)
    }

    /// Name of the owning ship.
    ///
    /// Fails with [`BoardError::NotAShip`] on an ocean tile.
    pub fn ship_name(&self) -> Result<&'a str, BoardError> {
        self.owner
            .map(Ship::name)
            .ok_or(BoardError::NotAShip {
                position: self.tile.position(),
            })
    }
}
