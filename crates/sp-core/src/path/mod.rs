//! Paths through a map and their enumeration

mod enumerate;

use core::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::map::{Coordinate, Floor, Map, Room};

pub use enumerate::{PathCursor, Paths, enumerate_paths};

/// One room per floor, from the start floor up to the map's last floor
///
/// Consecutive rooms are always joined by an edge of the map the path was
/// enumerated from. Serializes as a `{"floor": room}` object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    start: Floor,
    rooms: Vec<usize>,
}

impl Path {
    pub(crate) fn new(start: Floor, rooms: Vec<usize>) -> Self {
        debug_assert!(!rooms.is_empty());
        Self { start, rooms }
    }

    pub fn start_floor(&self) -> Floor {
        self.start
    }

    pub fn end_floor(&self) -> Floor {
        self.start
            .offset(self.rooms.len() - 1)
            .unwrap_or(Floor::LAST)
    }

    /// Number of floors covered
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room index taken on `floor`, if the path covers it
    pub fn room_at(&self, floor: Floor) -> Option<usize> {
        floor
            .index()
            .checked_sub(self.start.index())
            .and_then(|i| self.rooms.get(i))
            .copied()
    }

    /// Room indices, start floor first
    pub fn rooms(&self) -> &[usize] {
        &self.rooms
    }

    /// `(floor, room index)` pairs in floor order
    pub fn iter(&self) -> impl Iterator<Item = (Floor, usize)> + '_ {
        Floor::all()
            .skip(self.start.index())
            .zip(self.rooms.iter().copied())
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter().map(|(floor, room)| Coordinate::new(floor, room))
    }

    /// The rooms this path visits in `map`, in floor order
    ///
    /// Yields nothing past the first coordinate `map` does not contain.
    pub fn visit<'a>(&'a self, map: &'a Map) -> impl Iterator<Item = (Floor, &'a Room)> + 'a {
        self.coordinates()
            .map_while(move |coord| map.room(coord).map(|room| (coord.floor, room)))
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.room_at(coordinate.floor) == Some(coordinate.room)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.coordinates().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{coord}")?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rooms.len()))?;
        for (floor, room) in self.iter() {
            map.serialize_entry(&floor.number().to_string(), &room)?;
        }
        map.end()
    }
}
