//! Running state carried along a path

use serde::{Deserialize, Serialize};

use crate::map::RoomType;

/// What has happened on a path so far
///
/// The state seen by a room depends only on the rooms before it on the same
/// path. It is updated exactly once per room, in floor order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathState {
    /// Gold in hand
    pub gold: f64,
    /// Ordinary fights taken so far
    pub fights: u32,
    /// Unknown (`?`) rooms entered so far
    pub events: u32,
}

impl PathState {
    pub fn with_gold(gold: f64) -> Self {
        Self {
            gold,
            ..Self::default()
        }
    }

    /// The state after leaving a room of type `room`
    pub fn after(mut self, room: RoomType, rules: &StateRules) -> Self {
        self.record(room, rules);
        self
    }

    /// Apply the effects of visiting a room
    pub fn record(&mut self, room: RoomType, rules: &StateRules) {
        match room {
            RoomType::Fight => {
                self.fights += 1;
                self.gold += rules.gold_per_fight;
            }
            RoomType::Elite => self.gold += rules.gold_per_elite,
            RoomType::Super => self.gold += rules.gold_per_super,
            RoomType::Event => self.events += 1,
            RoomType::Shop => self.gold = rules.gold_after_shop,
            RoomType::Rest | RoomType::Treasure => {}
        }
    }
}

/// How each room type changes the running state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRules {
    pub gold_per_fight: f64,
    pub gold_per_elite: f64,
    pub gold_per_super: f64,
    /// Gold left after shopping
    pub gold_after_shop: f64,
}

impl Default for StateRules {
    fn default() -> Self {
        Self {
            gold_per_fight: 15.0,
            gold_per_elite: 30.0,
            gold_per_super: 30.0,
            gold_after_shop: 0.0,
        }
    }
}

impl StateRules {
    /// Rules that only count encounters and never touch gold
    pub const fn counting_only() -> Self {
        Self {
            gold_per_fight: 0.0,
            gold_per_elite: 0.0,
            gold_per_super: 0.0,
            gold_after_shop: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fight_and_event_counts() {
        let rules = StateRules::default();
        let state = PathState::with_gold(99.0)
            .after(RoomType::Fight, &rules)
            .after(RoomType::Event, &rules)
            .after(RoomType::Fight, &rules)
            .after(RoomType::Rest, &rules);

        assert_eq!(state.fights, 2);
        assert_eq!(state.events, 1);
        assert_eq!(state.gold, 129.0);
    }

    #[test]
    fn test_elites_pay_but_do_not_count_as_fights() {
        let rules = StateRules::default();
        let state = PathState::default()
            .after(RoomType::Elite, &rules)
            .after(RoomType::Super, &rules);
        assert_eq!(state.fights, 0);
        assert_eq!(state.gold, 60.0);
    }

    #[test]
    fn test_shop_resets_gold() {
        let rules = StateRules {
            gold_after_shop: 10.0,
            ..StateRules::default()
        };
        let state = PathState::with_gold(250.0).after(RoomType::Shop, &rules);
        assert_eq!(state.gold, 10.0);
    }

    #[test]
    fn test_partial_rules_from_json() {
        let rules: StateRules = serde_json::from_str(r#"{"gold_per_fight": 20}"#).unwrap();
        assert_eq!(rules.gold_per_fight, 20.0);
        assert_eq!(rules.gold_per_elite, 30.0);
    }
}
