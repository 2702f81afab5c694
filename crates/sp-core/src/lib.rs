//! sp-core: path analysis for Slay the Spire style maps
//!
//! A map is a fixed stack of floors whose rooms only connect to the floor
//! directly above. This crate enumerates every path through such a map,
//! finds the paths that visit the most rooms of chosen types, and ranks
//! paths by a stateful per-room valuation.
//!
//! Everything here is a pure computation over a borrowed, immutable map.
//! Building, editing and storing maps happens elsewhere.

pub mod coverage;
pub mod error;
pub mod map;
pub mod path;
pub mod query;
pub mod valuation;

mod consts;

pub use consts::*;
pub use coverage::{Coverage, CoveragePreset, max_coverage};
pub use error::{MapError, RankError};
pub use map::{Coordinate, Floor, Map, Room, RoomType};
pub use path::{Path, PathCursor, Paths, enumerate_paths};
pub use query::Query;
pub use valuation::{
    PathState, RoomValues, ScoreGroup, StateRules, Valuation, from_fn, rank_paths, score_label,
};
