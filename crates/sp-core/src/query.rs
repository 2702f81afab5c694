//! Entry points for callers
//!
//! A [`Query`] fixes a map and a set of start rooms, then answers the three
//! questions the map viewer asks: which paths exist, which paths visit the
//! most rooms of some types, and which paths are worth the most.

use tracing::debug;

use crate::coverage::{Coverage, CoveragePreset, max_coverage};
use crate::error::{MapError, RankError};
use crate::map::{Coordinate, Map, RoomType};
use crate::path::{Paths, enumerate_paths};
use crate::valuation::{PathState, ScoreGroup, Valuation, rank_paths};

/// Path questions over one map
///
/// Starts from every entry-floor room unless narrowed with
/// [`Query::starting_at`]. The map is only borrowed, so it cannot change
/// while a query is running.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    map: &'a Map,
    start: Option<Coordinate>,
}

impl<'a> Query<'a> {
    pub fn new(map: &'a Map) -> Self {
        Self { map, start: None }
    }

    /// Only consider paths beginning at `start`
    pub fn starting_at(self, start: Coordinate) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    pub fn map(&self) -> &'a Map {
        self.map
    }

    /// The explicit start room, if one was chosen
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    /// The start rooms this query enumerates from
    pub fn start_coordinates(&self) -> Vec<Coordinate> {
        match self.start {
            Some(start) => vec![start],
            None => self.map.entry_coordinates(),
        }
    }

    /// Lazily enumerate every path
    pub fn paths(&self) -> Result<Paths<'a>, MapError> {
        enumerate_paths(self.map, &self.start_coordinates())
    }

    /// Number of paths
    pub fn count(&self) -> Result<usize, MapError> {
        let count = self.paths()?.count();
        debug!(count, start = ?self.start, "counted paths");
        Ok(count)
    }

    /// Paths visiting the most rooms whose type is in `types`
    pub fn max_coverage(&self, types: &[RoomType]) -> Result<Coverage, MapError> {
        let coverage = max_coverage(self.map, &self.start_coordinates(), types)?;
        debug!(
            ?types,
            count = coverage.count,
            paths = coverage.paths.len(),
            "found best coverage"
        );
        Ok(coverage)
    }

    pub fn preset(&self, preset: CoveragePreset) -> Result<Coverage, MapError> {
        self.max_coverage(preset.types())
    }

    /// State at the start of every path
    ///
    /// Fights taken before the start room only matter when the query starts
    /// mid-map; from the entry floor there is nothing before the path.
    pub fn initial_state(&self, gold: f64, fights_before_path: u32) -> PathState {
        PathState {
            gold,
            fights: if self.start.is_some() {
                fights_before_path
            } else {
                0
            },
            events: 0,
        }
    }

    /// The `limit` best score groups, highest first
    pub fn rank<V: Valuation>(
        &self,
        valuation: &V,
        initial: PathState,
        limit: usize,
    ) -> Result<Vec<ScoreGroup>, RankError<V::Error>> {
        rank_paths(
            self.map,
            &self.start_coordinates(),
            valuation,
            initial,
            limit,
        )
    }

    /// The best-valued group, if there are any paths
    pub fn most_valuable<V: Valuation>(
        &self,
        valuation: &V,
        initial: PathState,
    ) -> Result<Option<ScoreGroup>, RankError<V::Error>> {
        Ok(self.rank(valuation, initial, 1)?.into_iter().next())
    }
}
