//! Common types for the board model: coordinates, handles, attack outcomes
//! and the errors returned by `Board`, `Ship` and `Tile` operations.

use alloc::string::String;
use core::fmt;
use core::ops::Add;

use crate::ship::Ship;

/// Absolute board coordinate. `x` is the column, `y` the row.
///
/// Signed so that a ship projected partly off the board can still be
/// described (and then rejected by validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offset of one ship segment relative to the ship's placement origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The offset turned a quarter clockwise: `(dx, dy) -> (dy, -dx)`.
    ///
    /// Negation wraps, so `i32::MIN` maps to itself and four turns always
    /// restore the original offset.
    pub const fn rotated_clockwise(self) -> Self {
        Self {
            dx: self.dy,
            dy: self.dx.wrapping_neg(),
        }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

/// Saturates at the `i32` limits; a saturated coordinate is never on a board.
impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position {
            x: self.x.saturating_add(rhs.dx),
            y: self.y.saturating_add(rhs.dy),
        }
    }
}

/// Handle of a ship committed to a `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Placement order of the ship on its board, starting at 0.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttemptResult {
    /// Shot landed in the ocean.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its name.
    Sunk(String),
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptResult::Miss => write!(f, "Miss"),
            AttemptResult::Hit => write!(f, "Hit"),
            AttemptResult::Sunk(name) => write!(f, "Sunk ({})", name),
        }
    }
}

/// Broad class of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke an operation's precondition.
    Precondition,
    /// A ship could not be placed where requested.
    Placement,
}

/// Errors returned by board, ship and tile operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size must be positive.
    InvalidSize,
    /// Coordinate lies outside the board.
    OutOfBounds { position: Position },
    /// A shot was already fired at this coordinate.
    AlreadyFired { position: Position },
    /// Rotation amount outside `0..4`.
    InvalidRotation { quarter_turns: i32 },
    /// Ship-only attribute requested from an ocean tile.
    NotAShip { position: Position },
    /// A ship tile would fall outside the board.
    ShipOutOfBounds { position: Position },
    /// A ship tile would cover another ship tile.
    ShipOverlaps { position: Position },
    /// No valid random placement was found.
    UnableToPlaceShip,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::InvalidSize
            | BoardError::OutOfBounds { .. }
            | BoardError::AlreadyFired { .. }
            | BoardError::InvalidRotation { .. }
            | BoardError::NotAShip { .. } => ErrorKind::Precondition,
            BoardError::ShipOutOfBounds { .. }
            | BoardError::ShipOverlaps { .. }
            | BoardError::UnableToPlaceShip => ErrorKind::Placement,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize => write!(f, "Board size must be greater than zero"),
            BoardError::OutOfBounds { position } => {
                write!(f, "Position {} is outside the board", position)
            }
            BoardError::AlreadyFired { position } => {
                write!(f, "Already fired at {}", position)
            }
            BoardError::InvalidRotation { quarter_turns } => write!(
                f,
                "Rotation must be between 0 and 3 quarter turns, got {}",
                quarter_turns
            ),
            BoardError::NotAShip { position } => {
                write!(f, "Tile at {} is ocean, not a ship", position)
            }
            BoardError::ShipOutOfBounds { position } => {
                write!(f, "Ship placement is out of bounds at {}", position)
            }
            BoardError::ShipOverlaps { position } => {
                write!(f, "Ship placement overlaps another ship at {}", position)
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Error returned when `Board::add_ship` rejects a ship.
///
/// The ship is handed back so it can be rotated or moved and offered again.
#[derive(Debug)]
pub struct PlaceError {
    error: BoardError,
    ship: Ship,
}

impl PlaceError {
    pub(crate) fn new(error: BoardError, ship: Ship) -> Self {
        Self { error, ship }
    }

    /// Why placement was refused.
    pub fn error(&self) -> &BoardError {
        &self.error
    }

    /// The ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Take back the ship that was not placed.
    pub fn into_ship(self) -> Ship {
        self.ship
    }

    /// Split into the cause and the ship.
    pub fn into_inner(self) -> (BoardError, Ship) {
        (self.error, self.ship)
    }
}

impl From<PlaceError> for BoardError {
    fn from(err: PlaceError) -> Self {
        err.error
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {}: {}", self.ship.name(), self.error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
