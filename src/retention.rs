//! Memory retention estimation
//!
//! Heuristic forgetting-curve estimate, monotone decreasing in elapsed
//! time and monotone increasing in completed reviews. Advisory only:
//! never persisted, no side effects.

use crate::error::{validate_count, EngineError};
use crate::types::{
    RETENTION_DAILY_DECAY, RETENTION_DAY_1, RETENTION_FLOOR, RETENTION_MONTH_1,
    RETENTION_REVIEW_BOOST, RETENTION_WEEK_1,
};

/// Estimated memory retention as a fraction in [0, 1].
///
/// Base retention follows the classic curve (26% after one day, 23%
/// within a week, 21% within a month, then decaying to a 10% floor);
/// each completed review adds a flat boost, capped at 1.0.
///
/// Returns [`EngineError::InvalidCount`] for a negative review count.
pub fn retention(days_since_study: i64, completed_reviews: i64) -> Result<f64, EngineError> {
    let count = validate_count(completed_reviews)?;

    if days_since_study <= 0 {
        return Ok(1.0);
    }

    let base = match days_since_study {
        1 => RETENTION_DAY_1,
        2..=7 => RETENTION_WEEK_1,
        8..=30 => RETENTION_MONTH_1,
        d => (RETENTION_MONTH_1 - (d - 30) as f64 * RETENTION_DAILY_DECAY).max(RETENTION_FLOOR),
    };

    let boosted = base + f64::from(count) * RETENTION_REVIEW_BOOST;
    Ok(boosted.min(1.0))
}
