//! Path valuation and ranking
//!
//! A valuation gives each room a value that may depend on what happened
//! earlier on the same path. The value of a path is the sum of its rooms'
//! values, folded from the start floor upwards with a [`PathState`].

mod rank;
mod state;
mod values;

use crate::map::{Floor, RoomType};

pub use rank::{ScoreGroup, path_value, rank_paths, score_label};
pub use state::{PathState, StateRules};
pub use values::RoomValues;

/// Per-room scoring along a path
pub trait Valuation {
    type Error;

    /// Value of entering a room of type `room` on `floor`, given the state
    /// left by the rooms before it
    fn value(&self, room: RoomType, floor: Floor, state: &PathState) -> Result<f64, Self::Error>;

    /// Update `state` after a room has been scored
    fn advance(&self, state: &mut PathState, room: RoomType) {
        state.record(room, &StateRules::default());
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    type Error = V::Error;

    fn value(&self, room: RoomType, floor: Floor, state: &PathState) -> Result<f64, Self::Error> {
        (**self).value(room, floor, state)
    }

    fn advance(&self, state: &mut PathState, room: RoomType) {
        (**self).advance(state, room)
    }
}

/// A valuation backed by a closure; see [`from_fn`]
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    f: F,
    rules: StateRules,
}

/// Use a closure as a valuation, with the default [`StateRules`]
pub fn from_fn<F, E>(f: F) -> FromFn<F>
where
    F: Fn(RoomType, Floor, &PathState) -> Result<f64, E>,
{
    FromFn {
        f,
        rules: StateRules::default(),
    }
}

impl<F> FromFn<F> {
    pub fn with_rules(self, rules: StateRules) -> Self {
        Self { rules, ..self }
    }
}

impl<F, E> Valuation for FromFn<F>
where
    F: Fn(RoomType, Floor, &PathState) -> Result<f64, E>,
{
    type Error = E;

    fn value(&self, room: RoomType, floor: Floor, state: &PathState) -> Result<f64, E> {
        (self.f)(room, floor, state)
    }

    fn advance(&self, state: &mut PathState, room: RoomType) {
        state.record(room, &self.rules);
    }
}
