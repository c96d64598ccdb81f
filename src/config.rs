use alloc::vec::Vec;

use crate::ship::Ship;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Static description of a ship: its name and segment offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    shape: &'static [(i32, i32)],
}

impl ShipDef {
    pub const fn new(name: &'static str, shape: &'static [(i32, i32)]) -> Self {
        Self { name, shape }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> &'static [(i32, i32)] {
        self.shape
    }

    pub fn length(&self) -> usize {
        self.shape.len()
    }

    /// A fresh, unplaced ship of this type.
    pub fn build(&self) -> Ship {
        Ship::new(self.name, self.shape.iter().copied())
    }
}

pub const STANDARD_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    ShipDef::new("Battleship", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    ShipDef::new("Cruiser", &[(0, 0), (1, 0), (2, 0)]),
    ShipDef::new("Submarine", &[(0, 0), (1, 0), (2, 0)]),
    ShipDef::new("Destroyer", &[(0, 0), (1, 0)]),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Unplaced ships for every entry of [`STANDARD_FLEET`].
pub fn standard_fleet() -> Vec<Ship> {
    STANDARD_FLEET.iter().map(ShipDef::build).collect()
}

/// Look up a standard ship definition by name.
pub fn ship_def(name: &str) -> Option<ShipDef> {
    STANDARD_FLEET.iter().copied().find(|def| def.name() == name)
}
