//! Compass directions and their numeric-keypad codes.
//!
//! Codes follow the keypad layout with north up:
//!
//! ```text
//! 7 8 9
//! 4 . 6
//! 1 2 3
//! ```

use std::fmt;

/// Text emitted in place of a direction code when two consecutive locations
/// are not linked by any direction slot.
pub const NO_DIRECTION: &str = "-1";

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// All directions in direction-table slot order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Order in which searches expand a location's neighbours.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Order in which the encoder scans slots for a link between two
    /// locations. Only matters when several slots point at the same target.
    pub const SCAN: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::W,
        Direction::E,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Index of this direction in a location's direction table.
    #[inline]
    pub const fn slot(self) -> usize {
        match self {
            Direction::N => 0,
            Direction::S => 1,
            Direction::E => 2,
            Direction::W => 3,
            Direction::NE => 4,
            Direction::NW => 5,
            Direction::SE => 6,
            Direction::SW => 7,
        }
    }

    /// Keypad digit for this direction.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Direction::N => 8,
            Direction::S => 2,
            Direction::E => 6,
            Direction::W => 4,
            Direction::NE => 9,
            Direction::NW => 7,
            Direction::SE => 3,
            Direction::SW => 1,
        }
    }

    /// Keypad digit as an ASCII character.
    #[inline]
    pub const fn as_char(self) -> char {
        (b'0' + self.code()) as char
    }

    /// Direction for a keypad digit. `5` (centre) and anything outside 1..=9
    /// has no direction.
    pub const fn from_code(code: u8) -> Option<Direction> {
        match code {
            8 => Some(Direction::N),
            2 => Some(Direction::S),
            6 => Some(Direction::E),
            4 => Some(Direction::W),
            9 => Some(Direction::NE),
            7 => Some(Direction::NW),
            3 => Some(Direction::SE),
            1 => Some(Direction::SW),
            _ => None,
        }
    }

    /// Direction for an ASCII keypad digit.
    pub fn from_char(c: char) -> Option<Direction> {
        let d = c.to_digit(10)?;
        Self::from_code(d as u8)
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
