//! Forgetting-curve interval table
//!
//! The Ebbinghaus-style recurrence behind all scheduling: a bounded table
//! of widening intervals for the first six reviews, then a fixed 30-day
//! tail. Review k (0-based) lands `offset(k)` days after the anchor date:
//!
//! - review 0: day 1
//! - review 1: day 3
//! - review 2: day 7
//! - review 3: day 15
//! - review 4: day 30
//! - review 5: day 60
//! - review 6+: day 90, 120, ... (+30 per review)

use crate::types::{LONG_TERM_INTERVAL, REVIEW_INTERVALS};

/// Day offset from the anchor date for the 0-based review index `k`.
///
/// Pure and total for all `k`, and strictly increasing: no two review
/// indices ever collide on the same day.
pub fn offset(k: u32) -> i64 {
    let table_len = REVIEW_INTERVALS.len() as u32;
    let table_sum: i64 = REVIEW_INTERVALS.iter().sum();
    if k < table_len {
        REVIEW_INTERVALS[..=(k as usize)].iter().sum()
    } else {
        table_sum + LONG_TERM_INTERVAL * i64::from(k - table_len + 1)
    }
}
