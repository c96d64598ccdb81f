//! Ship definitions: a named shape that generates its own tiles.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{BoardError, Offset, Position};
use crate::tile::{Tile, SUNK};

/// Width the symbol column of [`Ship::display_line`] is padded to.
pub const DISPLAY_WIDTH: usize = 10;
/// Replaces every symbol of a sunk ship's status line.
pub const MASK: char = '*';

/// A named ship made of segments at fixed offsets from its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    shape: Vec<Offset>,
    tiles: Vec<Tile>,
}

impl Ship {
    /// Create an unplaced ship.
    pub fn new<I, O>(name: impl Into<String>, shape: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Offset>,
    {
        Ship {
            name: name.into(),
            shape: shape.into_iter().map(Into::into).collect(),
            tiles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Segment offsets in their current rotation.
    pub fn shape(&self) -> &[Offset] {
        &self.shape
    }

    /// Tiles from the most recent [`Ship::create_tiles`], empty before that.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Symbol shown for an unhit segment: the first letter of the name.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Generate one tile per segment with `origin` as the anchor.
    ///
    /// Replaces any tiles from an earlier call. Bounds and overlap are not
    /// checked here; that is the board's job before it commits them.
    pub fn create_tiles(&mut self, origin: Position) -> &[Tile] {
        self.tiles = self
            .shape
            .iter()
            .map(|&offset| Tile::ship_segment(origin + offset))
            .collect();
        &self.tiles
    }

    /// Turn the shape clockwise by `quarter_turns` × 90°.
    ///
    /// Existing tiles keep their positions until `create_tiles` runs again.
    pub fn rotate(&mut self, quarter_turns: i32) -> Result<(), BoardError> {
        if !(0..4).contains(&quarter_turns) {
            return Err(BoardError::InvalidRotation { quarter_turns });
        }
        for _ in 0..quarter_turns {
            for offset in self.shape.iter_mut() {
                *offset = offset.rotated_clockwise();
            }
        }
        Ok(())
    }

    /// `true` once every tile has been hit. A ship without tiles is never sunk.
    pub fn is_sunk(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::was_hit)
    }

    /// Status line such as `"DD        Destroyer"`.
    ///
    /// Once any segment shows as sunk the symbols are masked so the final
    /// orientation is not revealed.
    pub fn display_line(&self) -> String {
        let symbols: String = self
            .tiles
            .iter()
            .map(|tile| tile.display_symbol(Some(self)))
            .collect();
        let symbols = if symbols.contains(SUNK) {
            core::iter::repeat(MASK).take(symbols.chars().count()).collect()
        } else {
            symbols
        };
        format!("{:<width$}{}", symbols, self.name, width = DISPLAY_WIDTH)
    }

    pub(crate) fn tile_mut(&mut self, segment: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(segment)
    }
}
