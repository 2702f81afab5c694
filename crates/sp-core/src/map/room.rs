//! Room types and rooms

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What a room holds
///
/// Names follow the map generator's JSON output. The older generator spelled
/// some of them differently, so those spellings are accepted as aliases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RoomType {
    /// Ordinary monster fight
    #[serde(alias = "enemy")]
    #[strum(to_string = "fight", serialize = "enemy")]
    Fight,
    /// Elite fight
    Elite,
    /// Upgraded (burning) elite
    Super,
    /// Campfire
    Rest,
    /// Unknown room (`?`)
    Event,
    /// Merchant
    #[serde(alias = "store")]
    #[strum(to_string = "shop", serialize = "store")]
    Shop,
    /// Chest
    #[serde(alias = "chest")]
    #[strum(to_string = "treasure", serialize = "chest")]
    Treasure,
}

impl RoomType {
    /// Rooms that start a combat encounter
    pub const fn is_combat(self) -> bool {
        matches!(self, RoomType::Fight | RoomType::Elite | RoomType::Super)
    }

    /// Any kind of elite
    pub const fn is_elite(self) -> bool {
        matches!(self, RoomType::Elite | RoomType::Super)
    }
}

/// A room on one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "typ")]
    room_type: RoomType,

    /// Indices into the next floor's room list, in traversal order
    #[serde(default)]
    connections: Vec<usize>,
}

impl Room {
    pub fn new(room_type: RoomType, connections: Vec<usize>) -> Self {
        Self {
            room_type,
            connections,
        }
    }

    /// A room with no way forward (normally only on the last floor)
    pub fn terminal(room_type: RoomType) -> Self {
        Self::new(room_type, Vec::new())
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Rooms reachable on the next floor, in the order paths visit them
    pub fn connections(&self) -> &[usize] {
        &self.connections
    }

    pub fn is_dead_end(&self) -> bool {
        self.connections.is_empty()
    }
}
