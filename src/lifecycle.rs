//! Review completion handling
//!
//! Handles the "review completed" event: flips the entry, advances the
//! subject's completed-review count, and proposes the follow-on entry.
//! No I/O happens here; the caller persists the outcome.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{validate_count, EngineError};
use crate::schedule::next_review_date;
use crate::types::{CompletionOutcome, ReviewEntry};

/// Marks `entry` complete and schedules the subject's next review.
///
/// `completed_reviews_before` is the subject's authoritative completed
/// count at the moment of completion, tracked externally and passed in
/// explicitly; the engine never recomputes it. The follow-on entry lands
/// at the interval for the advanced count, unless that date is already in
/// `existing` (same race caveat as [`crate::generator::generate_for`]:
/// the storage layer owns uniqueness).
pub fn complete_review(
    entry: &ReviewEntry,
    anchor: NaiveDate,
    completed_reviews_before: i64,
    existing: &HashSet<NaiveDate>,
) -> Result<CompletionOutcome, EngineError> {
    validate_count(completed_reviews_before)?;
    let next_count = completed_reviews_before + 1;
    let due = next_review_date(anchor, next_count)?;

    let completed_entry = ReviewEntry {
        completed: true,
        ..*entry
    };

    let next = if existing.contains(&due) {
        None
    } else {
        Some(ReviewEntry {
            subject: entry.subject,
            scheduled_date: due,
            ordinal: next_count + 1,
            review_count: next_count,
            completed: false,
        })
    };

    Ok(CompletionOutcome {
        entry: completed_entry,
        next,
        next_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, Subject};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(scheduled: NaiveDate, ordinal: i64, review_count: i64) -> ReviewEntry {
        ReviewEntry {
            subject: Subject::course(CourseId(1)),
            scheduled_date: scheduled,
            ordinal,
            review_count,
            completed: false,
        }
    }

    #[test]
    fn test_completion_flips_entry_and_advances_count() {
        let first = entry(d(2025, 1, 2), 1, 0);
        let outcome = complete_review(&first, d(2025, 1, 1), 0, &HashSet::new()).unwrap();

        assert!(outcome.entry.completed);
        assert_eq!(outcome.entry.scheduled_date, first.scheduled_date);
        assert_eq!(outcome.next_count, 1);

        // next review at offset(1) = 3 days after the anchor
        let next = outcome.next.unwrap();
        assert_eq!(next.scheduled_date, d(2025, 1, 4));
        assert_eq!(next.ordinal, 2);
        assert_eq!(next.review_count, 1);
        assert!(!next.completed);
    }

    #[test]
    fn test_no_follow_on_when_date_already_scheduled() {
        let first = entry(d(2025, 1, 2), 1, 0);
        let existing: HashSet<NaiveDate> = [d(2025, 1, 4)].into_iter().collect();
        let outcome = complete_review(&first, d(2025, 1, 1), 0, &existing).unwrap();

        assert!(outcome.entry.completed);
        assert!(outcome.next.is_none());
        assert_eq!(outcome.next_count, 1);
    }

    #[test]
    fn test_long_term_follow_on() {
        // sixth completion moves the subject onto the 30-day tail
        let sixth = entry(d(2025, 3, 2), 6, 5);
        let outcome = complete_review(&sixth, d(2025, 1, 1), 5, &HashSet::new()).unwrap();
        // offset(6) = 90 days from the anchor
        assert_eq!(outcome.next.unwrap().scheduled_date, d(2025, 4, 1));
    }

    #[test]
    fn test_negative_count_rejected() {
        let first = entry(d(2025, 1, 2), 1, 0);
        assert_eq!(
            complete_review(&first, d(2025, 1, 1), -2, &HashSet::new()),
            Err(EngineError::InvalidCount { count: -2 })
        );
    }
}
