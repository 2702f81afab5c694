//! Map constants
//!
//! An act of the Spire is fifteen floors tall; the boss sits past the last one.

/// Floors in a full act
pub const MAX_FLOORS: u8 = 15;

/// The entry floor of every act
pub const FIRST_FLOOR: u8 = 1;

/// Decimal places kept when bucketing path scores
pub const SCORE_DECIMALS: usize = 2;

/// Number of ranked groups shown by default
pub const DEFAULT_RANK_LIMIT: usize = 15;
