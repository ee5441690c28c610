//! Scoring module - line clear points and gravity speed
//!
//! Points depend only on how many rows one lock-in clears; there are no drop
//! bonuses, combos or back-to-back multipliers. Gravity speeds up by 1ms per
//! 25 points, from 500ms down to a 50ms floor.

use crate::types::{BASE_FALL_MS, LINE_SCORES, MAX_SPEEDUP_MS, MIN_FALL_MS, SCORE_PER_MS};

/// Points for clearing `lines` rows in a single lock-in.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Gravity interval for a given score: `max(50, 500 - min(score / 25, 450))`.
pub fn fall_interval_ms(score: u32) -> u32 {
    let speedup = (score / SCORE_PER_MS).min(MAX_SPEEDUP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}
