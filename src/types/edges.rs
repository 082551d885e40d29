//! Per-cell encodings: collision edge masks and tile rotations.
//!
//! Collision grids store one hex digit per cell. Each bit marks a blocked
//! cardinal edge of that cell, so `f` blocks all four sides and `0` blocks
//! none. Rotation grids store one decimal digit `0`-`3` per cell, counting
//! clockwise quarter turns.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Blocked edges of a single cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EdgeMask: u8 {
        const NORTH = 1 << 0;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl EdgeMask {
    /// Decode a single hex digit (`0`-`9`, `a`-`f`, case-insensitive).
    pub fn from_hex_digit(c: char) -> Option<Self> {
        let value = c.to_digit(16)?;
        Some(Self::from_bits_truncate(value as u8))
    }

    /// Encode as a lowercase hex digit.
    pub fn to_hex_digit(self) -> char {
        // bits() is always <= 0xf
        char::from_digit(u32::from(self.bits()), 16).unwrap_or('0')
    }

    /// Whether movement across the given edge is blocked.
    pub fn blocks(self, direction: Direction) -> bool {
        self.contains(direction.edge())
    }
}

/// Cardinal direction, as used by the movement collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The edge bit for this direction.
    pub fn edge(self) -> EdgeMask {
        match self {
            Direction::North => EdgeMask::NORTH,
            Direction::East => EdgeMask::EAST,
            Direction::South => EdgeMask::SOUTH,
            Direction::West => EdgeMask::WEST,
        }
    }

    /// The direction pointing back the way we came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Grid offset of a single step (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Clockwise quarter-turn rotation of a rendered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Decode a rotation digit `0`-`3`.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Rotation::None),
            '1' => Some(Rotation::Quarter),
            '2' => Some(Rotation::Half),
            '3' => Some(Rotation::ThreeQuarter),
            _ => None,
        }
    }

    /// Number of clockwise quarter turns.
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        u16::from(self.quarter_turns()) * 90
    }

    /// Encode as a digit character.
    pub fn to_digit(self) -> char {
        (b'0' + self.quarter_turns()) as char
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.quarter_turns()
    }
}
