//! Paths visiting the most rooms of chosen types

use serde::Serialize;

use crate::error::MapError;
use crate::map::{Coordinate, Map, RoomType};
use crate::path::{Path, enumerate_paths};

/// The best achievable count and every path reaching it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Coverage {
    /// Most rooms of the requested types on any single path
    pub count: usize,
    /// All paths with exactly `count` such rooms, in enumeration order
    pub paths: Vec<Path>,
}

/// Count the rooms along `path` whose type is one of `types`
pub fn count_matching(map: &Map, path: &Path, types: &[RoomType]) -> usize {
    path.visit(map)
        .filter(|(_, room)| types.contains(&room.room_type()))
        .count()
}

/// Find the paths from `starts` that visit the most rooms of `types`
///
/// With no types every path counts zero, so all paths are returned.
pub fn max_coverage(
    map: &Map,
    starts: &[Coordinate],
    types: &[RoomType],
) -> Result<Coverage, MapError> {
    let mut best = Coverage::default();

    for path in enumerate_paths(map, starts)? {
        let n = count_matching(map, &path, types);
        if n > best.count {
            best.count = n;
            best.paths.clear();
            best.paths.push(path);
        } else if n == best.count {
            best.paths.push(path);
        }
    }

    Ok(best)
}

/// Fixed coverage questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum CoveragePreset {
    #[strum(to_string = "Max elites + rests")]
    ElitesAndRests,
    #[strum(to_string = "Max elites + supers")]
    ElitesAndSupers,
    #[strum(to_string = "Max fights")]
    Fights,
    #[strum(to_string = "Max events")]
    Events,
}

impl CoveragePreset {
    pub fn types(self) -> &'static [RoomType] {
        match self {
            Self::ElitesAndRests => &[RoomType::Elite, RoomType::Rest],
            Self::ElitesAndSupers => &[RoomType::Elite, RoomType::Super],
            Self::Fights => &[RoomType::Fight],
            Self::Events => &[RoomType::Event],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Floor, Room};

    fn at(f: u8, room: usize) -> Coordinate {
        Coordinate::new(Floor::new(f).unwrap(), room)
    }

    /// 1:0 (fight) -> {2:0 elite, 2:1 rest, 2:2 fight} -> 3:0 rest / 3:1 elite
    fn map() -> Map {
        Map::new(vec![
            vec![Room::new(RoomType::Fight, vec![0, 1, 2])],
            vec![
                Room::new(RoomType::Elite, vec![0, 1]),
                Room::new(RoomType::Rest, vec![1]),
                Room::new(RoomType::Fight, vec![0]),
            ],
            vec![Room::terminal(RoomType::Rest), Room::terminal(RoomType::Elite)],
        ])
        .unwrap()
    }

    #[test]
    fn test_ties_are_kept() {
        let map = map();
        let cov = max_coverage(&map, &[at(1, 0)], &[RoomType::Elite, RoomType::Rest]).unwrap();
        assert_eq!(cov.count, 2);
        let found: Vec<_> = cov.paths.iter().map(|p| p.rooms().to_vec()).collect();
        assert_eq!(found, vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 1]]);
    }

    #[test]
    fn test_strictly_better_resets() {
        let map = map();
        let cov = max_coverage(&map, &[at(1, 0)], &[RoomType::Fight]).unwrap();
        assert_eq!(cov.count, 2);
        assert_eq!(cov.paths.len(), 1);
        assert_eq!(cov.paths[0].rooms(), &[0, 2, 0]);
    }

    #[test]
    fn test_no_types_returns_everything() {
        let map = map();
        let all: Vec<_> = enumerate_paths(&map, &[at(1, 0)]).unwrap().collect();
        let cov = max_coverage(&map, &[at(1, 0)], &[]).unwrap();
        assert_eq!(cov.count, 0);
        assert_eq!(cov.paths, all);
    }

    #[test]
    fn test_no_starts() {
        let cov = max_coverage(&map(), &[], &[RoomType::Rest]).unwrap();
        assert_eq!(cov, Coverage::default());
    }

    #[test]
    fn test_presets() {
        let map = map();
        let cov = max_coverage(&map, &[at(1, 0)], CoveragePreset::ElitesAndSupers.types()).unwrap();
        assert_eq!(cov.count, 2);
        assert_eq!(CoveragePreset::Events.to_string(), "Max events");
    }
}
