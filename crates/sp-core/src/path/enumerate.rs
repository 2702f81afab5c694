//! Depth-first path enumeration
//!
//! Paths are produced lazily, one per `next()`, by walking an explicit stack
//! of rooms instead of recursing. Descent always takes a room's first listed
//! connection; on backtrack the next listed sibling is tried. The order is
//! therefore fixed by the maps' connection lists and is the same on every run.

use core::iter::FusedIterator;

use crate::error::MapError;
use crate::map::{Coordinate, Floor, Map, Room};

use super::Path;

/// A room on the cursor stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    room: usize,
    /// Position of `room` in its parent's connection list
    slot: usize,
}

/// Enumerates every path from one start room to the last floor
#[derive(Debug, Clone)]
pub struct PathCursor<'a> {
    map: &'a Map,
    start: Floor,
    /// Floors from the start floor to the last floor, inclusive
    span: usize,
    stack: Vec<Frame>,
}

impl<'a> PathCursor<'a> {
    pub fn new(map: &'a Map, start: Coordinate) -> Result<Self, MapError> {
        map.check_start(start)?;
        Ok(Self::unchecked(map, start))
    }

    /// `start` must already have passed `Map::check_start`
    fn unchecked(map: &'a Map, start: Coordinate) -> Self {
        let stack = if map.rooms_at(start.floor.index()).is_empty() {
            Vec::new()
        } else {
            vec![Frame {
                room: start.room,
                slot: 0,
            }]
        };

        Self {
            map,
            start: start.floor,
            span: map.depth() - start.floor.index(),
            stack,
        }
    }

    /// Rooms `depth` floors above the start floor
    fn rooms_on(&self, depth: usize) -> &'a [Room] {
        self.map.rooms_at(self.start.index() + depth)
    }

    fn snapshot(&self) -> Path {
        Path::new(self.start, self.stack.iter().map(|f| f.room).collect())
    }

    /// Move to the next unexplored sibling, popping exhausted branches.
    /// Empties the stack once the start room has nothing left to offer.
    fn advance(&mut self) {
        while self.stack.len() > 1 {
            let depth = self.stack.len() - 1;
            let parent = self.stack[depth - 1].room;
            let siblings = self.rooms_on(depth - 1)[parent].connections();

            let top = &mut self.stack[depth];
            if let Some(&next) = siblings.get(top.slot + 1) {
                top.room = next;
                top.slot += 1;
                return;
            }
            self.stack.pop();
        }
        self.stack.clear();
    }
}

impl Iterator for PathCursor<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            let top = *self.stack.last()?;

            if self.stack.len() == self.span {
                let path = self.snapshot();
                self.advance();
                return Some(path);
            }

            let room = &self.rooms_on(self.stack.len() - 1)[top.room];
            match room.connections().first() {
                Some(&first) => self.stack.push(Frame {
                    room: first,
                    slot: 0,
                }),
                // dead end below the last floor
                None => self.advance(),
            }
        }
    }
}

impl FusedIterator for PathCursor<'_> {}

/// Paths from several start rooms, one start after the other
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    map: &'a Map,
    starts: std::vec::IntoIter<Coordinate>,
    current: Option<PathCursor<'a>>,
}

impl Iterator for Paths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            if let Some(path) = self.current.as_mut().and_then(Iterator::next) {
                return Some(path);
            }
            let start = self.starts.next()?;
            self.current = Some(PathCursor::unchecked(self.map, start));
        }
    }
}

impl FusedIterator for Paths<'_> {}

/// Enumerate every path from each of `starts` to the map's last floor
///
/// All start coordinates are checked before anything is enumerated. Paths
/// from different starts are concatenated in the order the starts are given.
pub fn enumerate_paths<'a>(map: &'a Map, starts: &[Coordinate]) -> Result<Paths<'a>, MapError> {
    for &start in starts {
        map.check_start(start)?;
    }

    Ok(Paths {
        map,
        starts: starts.to_vec().into_iter(),
        current: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RoomType;

    fn floor(n: u8) -> Floor {
        Floor::new(n).unwrap()
    }

    fn at(f: u8, room: usize) -> Coordinate {
        Coordinate::new(floor(f), room)
    }

    fn rooms(paths: impl Iterator<Item = Path>) -> Vec<Vec<usize>> {
        paths.map(|p| p.rooms().to_vec()).collect()
    }

    /// Two floor-1 rooms joining into one floor-2 room
    fn funnel() -> Map {
        Map::new(vec![
            vec![
                Room::new(RoomType::Fight, vec![0]),
                Room::new(RoomType::Rest, vec![0]),
            ],
            vec![Room::terminal(RoomType::Elite)],
        ])
        .unwrap()
    }

    /// 1:0 fans out to three rooms, which share two rooms on floor 3
    fn fan() -> Map {
        Map::new(vec![
            vec![Room::new(RoomType::Fight, vec![2, 0, 1])],
            vec![
                Room::new(RoomType::Event, vec![1]),
                Room::new(RoomType::Shop, vec![0, 1]),
                Room::new(RoomType::Fight, vec![1, 0]),
            ],
            vec![Room::terminal(RoomType::Rest), Room::terminal(RoomType::Elite)],
        ])
        .unwrap()
    }

    #[test]
    fn test_single_start() {
        let map = funnel();
        let paths: Vec<_> = PathCursor::new(&map, at(1, 0)).unwrap().collect();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].room_at(floor(1)), Some(0));
        assert_eq!(paths[0].room_at(floor(2)), Some(0));
    }

    #[test]
    fn test_all_entry_rooms() {
        let map = funnel();
        let paths = enumerate_paths(&map, &map.entry_coordinates()).unwrap();
        assert_eq!(rooms(paths), vec![vec![0, 0], vec![1, 0]]);
    }

    #[test]
    fn test_connection_list_order() {
        let map = fan();
        let paths = PathCursor::new(&map, at(1, 0)).unwrap();
        assert_eq!(
            rooms(paths),
            vec![
                vec![0, 2, 1],
                vec![0, 2, 0],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![0, 1, 1],
            ]
        );
    }

    #[test]
    fn test_sibling_zero_is_not_skipped() {
        // the second listed connection is room 0
        let map = Map::new(vec![
            vec![Room::new(RoomType::Fight, vec![1, 0])],
            vec![Room::terminal(RoomType::Rest), Room::terminal(RoomType::Shop)],
        ])
        .unwrap();
        let paths = PathCursor::new(&map, at(1, 0)).unwrap();
        assert_eq!(rooms(paths), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn test_dead_end_branch_is_dropped() {
        let map = Map::new(vec![
            vec![Room::new(RoomType::Fight, vec![0, 1])],
            vec![
                Room::terminal(RoomType::Event),
                Room::new(RoomType::Rest, vec![0]),
            ],
            vec![Room::terminal(RoomType::Elite)],
        ])
        .unwrap();
        let paths = PathCursor::new(&map, at(1, 0)).unwrap();
        assert_eq!(rooms(paths), vec![vec![0, 1, 0]]);
    }

    #[test]
    fn test_dead_start_room() {
        let map = Map::new(vec![
            vec![Room::terminal(RoomType::Fight)],
            vec![Room::terminal(RoomType::Rest)],
        ])
        .unwrap();
        assert_eq!(PathCursor::new(&map, at(1, 0)).unwrap().count(), 0);
    }

    #[test]
    fn test_start_on_last_floor() {
        let map = funnel();
        let paths: Vec<_> = PathCursor::new(&map, at(2, 0)).unwrap().collect();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].start_floor(), floor(2));
        assert_eq!(paths[0].end_floor(), floor(2));
    }

    #[test]
    fn test_start_mid_map() {
        let map = fan();
        let paths = PathCursor::new(&map, at(2, 1)).unwrap();
        assert_eq!(rooms(paths), vec![vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_empty_start_floor() {
        let map = Map::new(vec![vec![], vec![Room::terminal(RoomType::Rest)]]).unwrap();
        assert_eq!(PathCursor::new(&map, at(1, 0)).unwrap().count(), 0);
        assert!(map.entry_coordinates().is_empty());
        assert_eq!(enumerate_paths(&map, &[]).unwrap().count(), 0);
    }

    #[test]
    fn test_bad_start_is_rejected_up_front() {
        let map = funnel();
        let err = enumerate_paths(&map, &[at(1, 0), at(1, 2)]).unwrap_err();
        assert!(matches!(err, MapError::RoomOutOfRange { .. }));
        let err = enumerate_paths(&map, &[at(3, 0)]).unwrap_err();
        assert!(matches!(err, MapError::FloorOutOfRange { .. }));
    }

    #[test]
    fn test_fused() {
        let map = funnel();
        let mut cursor = PathCursor::new(&map, at(1, 1)).unwrap();
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_repeatable() {
        let map = fan();
        let starts = [at(1, 0), at(2, 2)];
        let first: Vec<_> = enumerate_paths(&map, &starts).unwrap().collect();
        let second: Vec<_> = enumerate_paths(&map, &starts).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }
}
