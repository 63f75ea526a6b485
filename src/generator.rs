//! Batch generation of upcoming review entries
//!
//! Materializes up to N upcoming [`ReviewEntry`] records for a subject
//! that has study history but an incomplete or absent schedule, skipping
//! dates that already have an entry. The engine only proposes entries;
//! persisting them is the caller's job.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::schedule::build_schedule;
use crate::types::{ReviewEntry, Subject};

/// Proposes new review entries for `subject`, anchored at `anchor`.
///
/// Dates already present in `existing` are skipped, so repeating the call
/// with the first call's output included in `existing` yields nothing.
/// Every emitted entry is stamped with the same `completed_reviews` value:
/// the count advances on completion events only, never on generation.
///
/// The skip is a pre-filter, not the correctness mechanism: two racing
/// callers can both pass the check, so the storage layer must enforce
/// uniqueness on `(subject, scheduled_date)` and treat an insert conflict
/// as "entry already exists".
///
/// The caller must have verified the subject has study history; `anchor`
/// is required here, and a subject without one is never passed in.
pub fn generate_for(
    subject: &Subject,
    anchor: NaiveDate,
    completed_reviews: i64,
    existing: &HashSet<NaiveDate>,
    max_entries: usize,
) -> Result<Vec<ReviewEntry>, EngineError> {
    let slots = build_schedule(anchor, completed_reviews, max_entries)?;
    Ok(slots
        .into_iter()
        .filter(|slot| !existing.contains(&slot.scheduled_date))
        .map(|slot| ReviewEntry {
            subject: *subject,
            scheduled_date: slot.scheduled_date,
            ordinal: slot.ordinal,
            review_count: completed_reviews,
            completed: false,
        })
        .collect())
}
