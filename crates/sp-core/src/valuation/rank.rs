//! Grouping and ranking paths by value

use core::cmp::Ordering;

use hashbrown::HashMap;
use serde::Serialize;
use tracing::debug;

use crate::SCORE_DECIMALS;
use crate::error::RankError;
use crate::map::{Coordinate, Map};
use crate::path::{Path, enumerate_paths};

use super::{PathState, Valuation};

/// Paths sharing one rounded score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGroup {
    /// Score with two decimals, e.g. `"5.00"`
    pub label: String,
    /// Numeric value of `label`
    pub score: f64,
    /// In enumeration order
    pub paths: Vec<Path>,
}

/// Round a score to two decimals the way the ranking buckets it
///
/// Matches JavaScript's `toFixed(2)`: a value exactly halfway between two
/// hundredths rounds away from zero, and negative zero prints as `0.00`. Values that
/// differ only past the second decimal share a label.
pub fn score_label(score: f64) -> String {
    let score = if score == 0.0 { 0.0 } else { score };

    // Only odd multiples of 1/8 sit exactly on a half hundredth
    let eighths = score * 8.0;
    if score.abs() < 1e12 && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let hundredths = (score.abs() * 100.0).ceil() as u64;
        let sign = if score < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }

    format!("{score:.prec$}", prec = SCORE_DECIMALS)
}

/// Sum of room values along `path`, threading `initial` through the rooms
pub fn path_value<V: Valuation>(
    map: &Map,
    path: &Path,
    valuation: &V,
    initial: PathState,
) -> Result<f64, V::Error> {
    let mut state = initial;
    let mut total = 0.0;
    for (floor, room) in path.visit(map) {
        total += valuation.value(room.room_type(), floor, &state)?;
        valuation.advance(&mut state, room.room_type());
    }
    Ok(total)
}

/// Rank every path from `starts` by value and keep the best `limit` groups
///
/// Paths are grouped by [`score_label`]; groups come back highest score first.
/// Errors from `valuation` stop the ranking and are returned as-is.
pub fn rank_paths<V: Valuation>(
    map: &Map,
    starts: &[Coordinate],
    valuation: &V,
    initial: PathState,
    limit: usize,
) -> Result<Vec<ScoreGroup>, RankError<V::Error>> {
    let mut groups: Vec<ScoreGroup> = Vec::new();
    let mut by_label: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for path in enumerate_paths(map, starts)? {
        let score = path_value(map, &path, valuation, initial).map_err(RankError::Valuation)?;
        if !score.is_finite() {
            return Err(RankError::NonFiniteScore { path, score });
        }
        total += 1;

        let label = score_label(score);
        match by_label.get(&label) {
            Some(&i) => groups[i].paths.push(path),
            None => {
                by_label.insert(label.clone(), groups.len());
                groups.push(ScoreGroup {
                    score: label.parse().unwrap_or(score),
                    label,
                    paths: vec![path],
                });
            }
        }
    }

    // stable: equal scores ("-0.00" and "0.00") keep first-seen order
    groups.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    groups.truncate(limit);

    debug!(paths = total, groups = groups.len(), limit, "ranked paths");
    Ok(groups)
}
