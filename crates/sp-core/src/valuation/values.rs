//! Default per-room weights

use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::map::{Floor, RoomType};

use super::{PathState, StateRules, Valuation};

/// Tunable value of each room type
///
/// Fights are worth more while they are still easy: a fight counts as easy
/// while `fights + min(fights_in_events, events)` is at most
/// `easy_fight_limit`, where `fights_in_events` is how many of the `?` rooms
/// already taken are assumed to have been fights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomValues {
    pub easy_fight: f64,
    pub hard_fight: f64,
    pub elite: f64,
    #[serde(rename = "super")]
    pub super_elite: f64,
    pub rest: f64,
    pub event: f64,
    pub shop: f64,
    /// Added to `shop` per 100 gold in hand
    pub shop_per_100_gold: f64,
    pub treasure: f64,
    pub easy_fight_limit: u32,
    pub fights_in_events: u32,
    /// State changes applied after each room
    pub rules: StateRules,
}

impl Default for RoomValues {
    fn default() -> Self {
        Self {
            easy_fight: 1.0,
            hard_fight: 0.9,
            elite: 1.2,
            super_elite: 1.3,
            rest: 1.2,
            event: 0.8,
            shop: 0.3,
            shop_per_100_gold: 0.4,
            treasure: 0.8,
            easy_fight_limit: 2,
            fights_in_events: 0,
            rules: StateRules::default(),
        }
    }
}

impl RoomValues {
    /// Whether the next fight on a path in `state` is still an easy one
    pub fn is_easy_fight(&self, state: &PathState) -> bool {
        state.fights + self.fights_in_events.min(state.events) <= self.easy_fight_limit
    }

    pub fn room_value(&self, room: RoomType, state: &PathState) -> f64 {
        match room {
            RoomType::Fight if self.is_easy_fight(state) => self.easy_fight,
            RoomType::Fight => self.hard_fight,
            RoomType::Elite => self.elite,
            RoomType::Super => self.super_elite,
            RoomType::Rest => self.rest,
            RoomType::Event => self.event,
            RoomType::Shop => self.shop + self.shop_per_100_gold * state.gold / 100.0,
            RoomType::Treasure => self.treasure,
        }
    }
}

impl Valuation for RoomValues {
    type Error = Infallible;

    fn value(&self, room: RoomType, _floor: Floor, state: &PathState) -> Result<f64, Infallible> {
        Ok(self.room_value(room, state))
    }

    fn advance(&self, state: &mut PathState, room: RoomType) {
        state.record(room, &self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_then_hard_fights() {
        let values = RoomValues::default();
        let mut state = PathState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(values.room_value(RoomType::Fight, &state));
            values.advance(&mut state, RoomType::Fight);
        }
        assert_eq!(seen, vec![1.0, 1.0, 1.0, 0.9]);
    }

    #[test]
    fn test_events_may_count_as_fights() {
        let values = RoomValues {
            fights_in_events: 1,
            ..RoomValues::default()
        };
        let state = PathState {
            fights: 2,
            events: 3,
            ..PathState::default()
        };
        assert!(!values.is_easy_fight(&state));

        let state = PathState {
            fights: 2,
            ..PathState::default()
        };
        assert!(values.is_easy_fight(&state));
    }

    #[test]
    fn test_shop_scales_with_gold() {
        let values = RoomValues::default();
        let value = values.room_value(RoomType::Shop, &PathState::with_gold(250.0));
        assert!((value - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_settings_json() {
        let values: RoomValues =
            serde_json::from_str(r#"{"super": 2.0, "rules": {"gold_per_fight": 10}}"#).unwrap();
        assert_eq!(values.super_elite, 2.0);
        assert_eq!(values.elite, 1.2);
        assert_eq!(values.rules.gold_per_fight, 10.0);
    }
}
