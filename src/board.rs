//! Game board: a square grid of tiles, ship placement, attacks and the
//! textual rendering consumed by front ends.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};
use rand::Rng;

use crate::common::{AttemptResult, BoardError, PlaceError, Position, ShipId};
use crate::ship::Ship;
use crate::tile::{Tile, TileView};

/// How many random candidates `random_placement` tries before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Content of one grid cell. Ship tiles live in their ship; the grid only
/// keeps a handle to them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    Ocean(Tile),
    Ship { ship: ShipId, segment: usize },
}

/// A `size`×`size` board. Row index is `y`, column index is `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Cell>>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create a board filled with unhit ocean tiles.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || i32::try_from(size).is_err() {
            return Err(BoardError::InvalidSize);
        }
        let grid = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| Cell::Ocean(Tile::ocean(Position::new(x as i32, y as i32))))
                    .collect()
            })
            .collect();
        Ok(Board {
            size,
            grid,
            ships: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships committed to the board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// The tile at `position`, joined with its owning ship.
    pub fn tile(&self, position: Position) -> Result<TileView<'_>, BoardError> {
        let (x, y) = self.index(position)?;
        Ok(self.view(&self.grid[y][x]))
    }

    /// Check candidate ship tiles against the board without changing it.
    ///
    /// Every tile must be on the board, must not cover an existing ship tile
    /// and must not share a position with another tile in the same batch.
    pub fn validate_tiles(&self, tiles: &[Tile]) -> Result<(), BoardError> {
        for (i, tile) in tiles.iter().enumerate() {
            let position = tile.position();
            let (x, y) = self
                .index(position)
                .map_err(|_| BoardError::ShipOutOfBounds { position })?;
            let occupied = matches!(self.grid[y][x], Cell::Ship { .. });
            if occupied || tiles[..i].iter().any(|t| t.position() == position) {
                return Err(BoardError::ShipOverlaps { position });
            }
        }
        Ok(())
    }

    /// Place `ship` with its shape anchored at `origin`.
    ///
    /// Nothing on the board changes unless every tile validates. On failure
    /// the ship is returned inside the error.
    pub fn add_ship(&mut self, mut ship: Ship, origin: Position) -> Result<ShipId, PlaceError> {
        let id = ShipId(self.ships.len());
        let tiles = ship.create_tiles(origin);
        if let Err(error) = self.validate_tiles(tiles) {
            log::trace!("rejected {} at {}: {}", ship.name(), origin, error);
            return Err(PlaceError::new(error, ship));
        }
        for (segment, tile) in ship.tiles().iter().enumerate() {
            if let Ok((x, y)) = self.index(tile.position()) {
                self.grid[y][x] = Cell::Ship { ship: id, segment };
            }
        }
        log::debug!("placed {} at {} as ship #{}", ship.name(), origin, id.0);
        self.ships.push(ship);
        Ok(id)
    }

    /// Find a random rotation and origin where `ship` fits.
    ///
    /// The ship is left in the rotation that was found; pass it to
    /// [`Board::add_ship`] with the returned origin to commit it.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: &mut Ship,
    ) -> Result<Position, BoardError> {
        // `new` guarantees the size fits in an i32.
        let bound = self.size as i32;
        for _ in 0..PLACEMENT_ATTEMPTS {
            ship.rotate(rng.random_range(0..4))?;
            let origin = Position::new(rng.random_range(0..bound), rng.random_range(0..bound));
            if self.validate_tiles(ship.create_tiles(origin)).is_ok() {
                return Ok(origin);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly rotate and place `ship`.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R, mut ship: Ship) -> Result<ShipId, PlaceError> {
        match self.random_placement(rng, &mut ship) {
            Ok(origin) => self.add_ship(ship, origin),
            Err(error) => Err(PlaceError::new(error, ship)),
        }
    }

    /// Whether the tile at `position` has already been fired at.
    pub fn has_been_used(&self, position: Position) -> Result<bool, BoardError> {
        Ok(self.tile(position)?.was_hit())
    }

    /// Fire at `position`, marking the tile hit and reporting the outcome.
    pub fn attempt_move(&mut self, position: Position) -> Result<AttemptResult, BoardError> {
        let (x, y) = self.index(position)?;
        if self.has_been_used(position)? {
            return Err(BoardError::AlreadyFired { position });
        }
        let result = match self.grid[y][x] {
            Cell::Ocean(ref mut tile) => {
                tile.take_hit();
                AttemptResult::Miss
            }
            Cell::Ship { ship, segment } => {
                let owner = &mut self.ships[ship.0];
                if let Some(tile) = owner.tile_mut(segment) {
                    tile.take_hit();
                }
                if owner.is_sunk() {
                    AttemptResult::Sunk(owner.name().into())
                } else {
                    AttemptResult::Hit
                }
            }
        };
        log::debug!("shot at {}: {}", position, result);
        Ok(result)
    }

    /// Framed text view of the board, top row first, with axis labels.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// One `display_line` per ship, in placement order.
    pub fn fleet_report(&self) -> String {
        let mut out = String::new();
        for ship in &self.ships {
            out.push_str(&ship.display_line());
            out.push('\n');
        }
        out
    }

    fn write_grid<W: Write>(&self, w: &mut W) -> fmt::Result {
        let label_width = digits(self.size - 1);

        self.write_border(w, label_width)?;
        for y in (0..self.size).rev() {
            write!(w, "{:>width$} | ", y, width = label_width)?;
            for cell in &self.grid[y] {
                write!(w, "{} ", self.view(cell).display_symbol())?;
            }
            w.write_str("|\n")?;
        }
        self.write_border(w, label_width)?;

        // One header line per digit place, most significant first.
        for place in (0..label_width).rev() {
            let divisor = 10usize.pow(place as u32);
            write!(w, "{:width$}", "", width = label_width + 3)?;
            for col in 0..self.size {
                if place == 0 || col >= divisor {
                    write!(w, "{} ", (col / divisor) % 10)?;
                } else {
                    w.write_str("  ")?;
                }
            }
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn write_border<W: Write>(&self, w: &mut W, label_width: usize) -> fmt::Result {
        write!(w, "{:width$}+", "", width = label_width + 1)?;
        for _ in 0..2 * self.size + 1 {
            w.write_char('-')?;
        }
        w.write_str("+\n")
    }

    fn index(&self, position: Position) -> Result<(usize, usize), BoardError> {
        let x = usize::try_from(position.x).ok();
        let y = usize::try_from(position.y).ok();
        match (x, y) {
            (Some(x), Some(y)) if x < self.size && y < self.size => Ok((x, y)),
            _ => Err(BoardError::OutOfBounds { position }),
        }
    }

    fn view<'a>(&'a self, cell: &'a Cell) -> TileView<'a> {
        match *cell {
            Cell::Ocean(ref tile) => TileView::new(tile, None),
            Cell::Ship { ship, segment } => {
                let owner = &self.ships[ship.0];
                TileView::new(&owner.tiles()[segment], Some(owner))
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f)
    }
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
