//! Error types for map validation and path queries

use thiserror::Error;

use crate::map::{Coordinate, Floor};
use crate::path::Path;

/// A map that breaks the layered-graph rules, or a query that points outside it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("a map needs between 1 and 15 floors, got {0}")]
    InvalidDepth(usize),

    #[error("floor {0} is missing")]
    MissingFloor(u8),

    #[error("floor {0} is outside 1..=15")]
    UnknownFloor(u8),

    #[error("room {room} on floor {floor} connects to room {target}, but the next floor has only {available} rooms")]
    DanglingConnection {
        floor: Floor,
        room: usize,
        target: usize,
        available: usize,
    },

    #[error("room {room} on floor {floor} lists room {target} more than once")]
    DuplicateConnection {
        floor: Floor,
        room: usize,
        target: usize,
    },

    #[error("room {room} on the last floor ({floor}) has outgoing connections")]
    ConnectionPastTerminal { floor: Floor, room: usize },

    #[error("floor {floor} is not part of this map (last floor is {last})")]
    FloorOutOfRange { floor: Floor, last: Floor },

    #[error("no room at {coordinate} (floor has {available} rooms)")]
    RoomOutOfRange {
        coordinate: Coordinate,
        available: usize,
    },
}

/// Failure while ranking paths by value
#[derive(Debug, Error)]
pub enum RankError<E> {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("valuation failed: {0}")]
    Valuation(E),

    #[error("path {path} scored {score}, which cannot be ranked")]
    NonFiniteScore { path: Path, score: f64 },
}
