//! Floor numbers and room coordinates

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FIRST_FLOOR, MAX_FLOORS};

/// A floor number in `1..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Floor(u8);

impl Floor {
    /// The entry floor
    pub const FIRST: Floor = Floor(FIRST_FLOOR);

    /// The last floor of a full act
    pub const LAST: Floor = Floor(MAX_FLOORS);

    /// Create a floor, returning `None` outside `1..=15`
    pub const fn new(number: u8) -> Option<Self> {
        if number >= FIRST_FLOOR && number <= MAX_FLOORS {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The 1-based floor number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position of this floor in a map's floor list
    pub const fn index(self) -> usize {
        (self.0 - FIRST_FLOOR) as usize
    }

    /// The floor above, if it is still inside an act
    pub const fn next(self) -> Option<Floor> {
        Floor::new(self.0 + 1)
    }

    /// Floor `offset` steps above this one
    pub(crate) fn offset(self, offset: usize) -> Option<Floor> {
        u8::try_from(offset)
            .ok()
            .and_then(|o| self.0.checked_add(o))
            .and_then(Floor::new)
    }

    /// Iterate every floor of a full act, lowest first
    pub fn all() -> impl Iterator<Item = Floor> {
        (FIRST_FLOOR..=MAX_FLOORS).map(Floor)
    }
}

impl TryFrom<u8> for Floor {
    type Error = InvalidFloor;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Floor::new(number).ok_or(InvalidFloor(number))
    }
}

impl From<Floor> for u8 {
    fn from(floor: Floor) -> u8 {
        floor.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A floor number outside `1..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("floor {0} is outside 1..=15")]
pub struct InvalidFloor(pub u8);

/// A specific room: its floor and its index in that floor's room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub floor: Floor,
    pub room: usize,
}

impl Coordinate {
    pub const fn new(floor: Floor, room: usize) -> Self {
        Self { floor, room }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.floor, self.room)
    }
}

/// Errors from parsing a `floor:room` coordinate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordinateError {
    #[error("expected `floor:room`, got `{0}`")]
    Format(String),

    #[error("`{0}` is not a number")]
    Number(String),

    #[error(transparent)]
    Floor(#[from] InvalidFloor),
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (floor, room) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParseCoordinateError::Format(s.to_string()))?;
        let floor: u8 = floor
            .trim()
            .parse()
            .map_err(|_| ParseCoordinateError::Number(floor.to_string()))?;
        let room: usize = room
            .trim()
            .parse()
            .map_err(|_| ParseCoordinateError::Number(room.to_string()))?;
        Ok(Coordinate::new(Floor::try_from(floor)?, room))
    }
}
