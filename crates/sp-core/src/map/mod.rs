//! Layered map model
//!
//! A map is a stack of floors. Every room on a floor lists the rooms it leads
//! to on the floor directly above, so edges only ever join adjacent floors.
//! Maps are validated once when they are built and never change afterwards;
//! editing happens outside this crate by building a new map.

mod floor;
mod room;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::MAX_FLOORS;
use crate::error::MapError;

pub use floor::{Coordinate, Floor, InvalidFloor, ParseCoordinateError};
pub use room::{Room, RoomType};

/// An immutable, validated layered map
///
/// Serialized as an object keyed by floor number, e.g.
/// `{"1": [{"typ": "fight", "connections": [0]}], "2": [{"typ": "rest"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, Vec<Room>>", into = "BTreeMap<u8, Vec<Room>>")]
pub struct Map {
    /// Floor 1 first
    floors: Vec<Vec<Room>>,
}

impl Map {
    /// Build a map from its floors, lowest first
    pub fn new(floors: Vec<Vec<Room>>) -> Result<Self, MapError> {
        validate(&floors)?;
        Ok(Self { floors })
    }

    /// Number of floors
    pub fn depth(&self) -> usize {
        self.floors.len()
    }

    /// The terminal floor, where every path ends
    pub fn last_floor(&self) -> Floor {
        // depth is checked to be in 1..=15 on construction
        Floor::FIRST.offset(self.floors.len() - 1).unwrap_or(Floor::LAST)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        floor.index() < self.floors.len()
    }

    /// Rooms on a floor, in index order
    pub fn floor(&self, floor: Floor) -> Option<&[Room]> {
        self.floors.get(floor.index()).map(Vec::as_slice)
    }

    pub fn room(&self, coordinate: Coordinate) -> Option<&Room> {
        self.floor(coordinate.floor)?.get(coordinate.room)
    }

    /// Every floor with its rooms, lowest first
    pub fn floors(&self) -> impl Iterator<Item = (Floor, &[Room])> {
        Floor::all().zip(self.floors.iter().map(Vec::as_slice))
    }

    /// Total number of rooms on all floors
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    /// One coordinate per room on the entry floor
    pub fn entry_coordinates(&self) -> Vec<Coordinate> {
        self.floor(Floor::FIRST)
            .map(|rooms| {
                (0..rooms.len())
                    .map(|room| Coordinate::new(Floor::FIRST, room))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check that a coordinate can start an enumeration
    ///
    /// A start floor without rooms is allowed; it simply has no paths.
    pub fn check_start(&self, coordinate: Coordinate) -> Result<(), MapError> {
        let rooms = self.floor(coordinate.floor).ok_or(MapError::FloorOutOfRange {
            floor: coordinate.floor,
            last: self.last_floor(),
        })?;
        if !rooms.is_empty() && coordinate.room >= rooms.len() {
            return Err(MapError::RoomOutOfRange {
                coordinate,
                available: rooms.len(),
            });
        }
        Ok(())
    }

    /// Rooms at a zero-based floor position known to be inside the map
    pub(crate) fn rooms_at(&self, index: usize) -> &[Room] {
        &self.floors[index]
    }
}

fn validate(floors: &[Vec<Room>]) -> Result<(), MapError> {
    if floors.is_empty() || floors.len() > MAX_FLOORS as usize {
        return Err(MapError::InvalidDepth(floors.len()));
    }

    for (floor, rooms) in Floor::all().zip(floors) {
        let next = floors.get(floor.index() + 1);
        for (index, room) in rooms.iter().enumerate() {
            let Some(next_rooms) = next else {
                if !room.is_dead_end() {
                    return Err(MapError::ConnectionPastTerminal { floor, room: index });
                }
                continue;
            };

            for (position, &target) in room.connections().iter().enumerate() {
                if target >= next_rooms.len() {
                    return Err(MapError::DanglingConnection {
                        floor,
                        room: index,
                        target,
                        available: next_rooms.len(),
                    });
                }
                if room.connections()[..position].contains(&target) {
                    return Err(MapError::DuplicateConnection {
                        floor,
                        room: index,
                        target,
                    });
                }
            }
        }
    }

    Ok(())
}

impl TryFrom<BTreeMap<u8, Vec<Room>>> for Map {
    type Error = MapError;

    fn try_from(mut by_number: BTreeMap<u8, Vec<Room>>) -> Result<Self, Self::Error> {
        if let Some((&number, _)) = by_number
            .iter()
            .find(|(number, _)| Floor::new(**number).is_none())
        {
            return Err(MapError::UnknownFloor(number));
        }

        let depth = by_number.keys().next_back().copied().unwrap_or(0);
        let mut floors = Vec::with_capacity(depth as usize);
        for number in 1..=depth {
            let rooms = by_number
                .remove(&number)
                .ok_or(MapError::MissingFloor(number))?;
            floors.push(rooms);
        }
        Map::new(floors)
    }
}

impl From<Map> for BTreeMap<u8, Vec<Room>> {
    fn from(map: Map) -> Self {
        Floor::all()
            .map(Floor::number)
            .zip(map.floors)
            .collect()
    }
}
