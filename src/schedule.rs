//! Review date calculation and due checks
//!
//! Turns an anchor date (most recent study activity) and a completed-review
//! count into concrete future review dates. All arithmetic is by calendar
//! date; time-of-day is ignored throughout.

use chrono::{Duration, NaiveDate, Utc};

use crate::curve::offset;
use crate::error::{validate_count, EngineError};
use crate::types::ScheduleSlot;

fn date_at_offset(anchor: NaiveDate, offset_days: i64) -> Result<NaiveDate, EngineError> {
    anchor
        .checked_add_signed(Duration::days(offset_days))
        .ok_or(EngineError::DateOutOfRange {
            anchor,
            offset_days,
        })
}

/// The next `count` review dates for a subject, in order.
///
/// Review `i` of the result falls `offset(completed_reviews + i)` days
/// after the anchor. The result always has exactly `count` elements.
pub fn future_review_dates(
    anchor: NaiveDate,
    completed_reviews: i64,
    count: usize,
) -> Result<Vec<NaiveDate>, EngineError> {
    let done = validate_count(completed_reviews)?;
    (0..count)
        .map(|i| date_at_offset(anchor, offset(done.saturating_add(i as u32))))
        .collect()
}

/// The single next review date for a subject.
pub fn next_review_date(
    anchor: NaiveDate,
    completed_reviews: i64,
) -> Result<NaiveDate, EngineError> {
    let done = validate_count(completed_reviews)?;
    date_at_offset(anchor, offset(done))
}

/// Upcoming schedule for a subject: the next `max_entries` review dates,
/// each paired with its ordinal (`completed_reviews + i + 1`). This is
/// the batch used to seed a subject's review entries.
pub fn build_schedule(
    anchor: NaiveDate,
    completed_reviews: i64,
    max_entries: usize,
) -> Result<Vec<ScheduleSlot>, EngineError> {
    let dates = future_review_dates(anchor, completed_reviews, max_entries)?;
    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(i, scheduled_date)| ScheduleSlot {
            scheduled_date,
            ordinal: completed_reviews + i as i64 + 1,
        })
        .collect())
}

/// Whether the subject's next review is due on `today`: true iff `today`
/// is on or after the next review date.
pub fn is_due_on(
    anchor: NaiveDate,
    completed_reviews: i64,
    today: NaiveDate,
) -> Result<bool, EngineError> {
    Ok(today >= next_review_date(anchor, completed_reviews)?)
}

/// [`is_due_on`] against the current UTC calendar date.
pub fn is_due_now(anchor: NaiveDate, completed_reviews: i64) -> Result<bool, EngineError> {
    is_due_on(anchor, completed_reviews, Utc::now().date_naive())
}
