//! Engine orchestrator
//!
//! Thin wrapper that wires a [`StudyStore`] into the pure scheduling
//! functions: derives the anchor date, completed-review count, and
//! already-scheduled dates for a subject, then delegates. All tracing
//! lives here; the pure modules stay silent.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::store::StudyStore;
use crate::types::{
    CompletionOutcome, ReviewAnchor, ReviewEntry, Subject, DEFAULT_GENERATED_ENTRIES,
};
use crate::{generator, lifecycle, retention, schedule};

/// One upcoming review with the retention the curve projects for that
/// day, assuming no review happens in between. Advisory display data,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReview {
    pub scheduled_date: NaiveDate,
    pub ordinal: i64,
    pub projected_retention: f64,
}

/// Scheduling engine bound to a storage collaborator.
///
/// Every method resolves the subject's state through the store and calls
/// the corresponding pure function; the store is read-only here, and
/// persisting proposed entries stays with the caller.
#[derive(Debug)]
pub struct ReviewEngine<S> {
    store: S,
}

impl<S: StudyStore> ReviewEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Resolves the subject's scheduling state: anchor date (most recent
    /// study activity) plus the authoritative completed-review count.
    /// Fails with [`EngineError::MissingAnchor`] if the subject has never
    /// been studied.
    pub fn anchor_state(&self, subject: &Subject) -> Result<ReviewAnchor, EngineError> {
        let anchor_date = self
            .store
            .most_recent_study_date(subject)
            .ok_or(EngineError::MissingAnchor)?;
        Ok(ReviewAnchor {
            subject: *subject,
            anchor_date,
            completed_reviews: self.store.completed_review_count_for(subject),
        })
    }

    /// Proposes up to [`DEFAULT_GENERATED_ENTRIES`] new review entries
    /// for the subject. Fails with [`EngineError::MissingAnchor`] if the
    /// subject has never been studied.
    pub fn generate(&self, subject: &Subject) -> Result<Vec<ReviewEntry>, EngineError> {
        self.generate_with(subject, DEFAULT_GENERATED_ENTRIES)
    }

    /// [`Self::generate`] with an explicit batch size.
    pub fn generate_with(
        &self,
        subject: &Subject,
        max_entries: usize,
    ) -> Result<Vec<ReviewEntry>, EngineError> {
        let state = self.anchor_state(subject)?;
        let existing = self.store.scheduled_dates_for(subject);
        let entries = generator::generate_for(
            subject,
            state.anchor_date,
            state.completed_reviews,
            &existing,
            max_entries,
        )?;
        debug!(
            ?subject,
            anchor = %state.anchor_date,
            completed = state.completed_reviews,
            proposed = entries.len(),
            "generated review batch"
        );
        Ok(entries)
    }

    /// Handles a completion event for `entry`, proposing the follow-on
    /// entry. The caller persists the outcome and advances the subject's
    /// completed-review counter.
    pub fn complete(&self, entry: &ReviewEntry) -> Result<CompletionOutcome, EngineError> {
        let state = self.anchor_state(&entry.subject)?;
        let existing = self.store.scheduled_dates_for(&entry.subject);
        let outcome = lifecycle::complete_review(
            entry,
            state.anchor_date,
            state.completed_reviews,
            &existing,
        )?;
        debug!(
            subject = ?entry.subject,
            anchor = %state.anchor_date,
            next_count = outcome.next_count,
            follow_on = outcome.next.is_some(),
            "completed review"
        );
        Ok(outcome)
    }

    /// Whether the subject's next review is due on `today`.
    pub fn is_due_on(&self, subject: &Subject, today: NaiveDate) -> Result<bool, EngineError> {
        let state = self.anchor_state(subject)?;
        schedule::is_due_on(state.anchor_date, state.completed_reviews, today)
    }

    /// [`Self::is_due_on`] against the current UTC calendar date.
    pub fn is_due_now(&self, subject: &Subject) -> Result<bool, EngineError> {
        self.is_due_on(subject, Utc::now().date_naive())
    }

    /// Estimated retention for the subject as of `today`.
    pub fn retention_on(&self, subject: &Subject, today: NaiveDate) -> Result<f64, EngineError> {
        let state = self.anchor_state(subject)?;
        let days = (today - state.anchor_date).num_days();
        retention::retention(days, state.completed_reviews)
    }

    /// Upcoming schedule with projected retention per date, for display.
    pub fn preview(
        &self,
        subject: &Subject,
        max_entries: usize,
    ) -> Result<Vec<UpcomingReview>, EngineError> {
        let state = self.anchor_state(subject)?;
        schedule::build_schedule(state.anchor_date, state.completed_reviews, max_entries)?
            .into_iter()
            .map(|slot| {
                let days = (slot.scheduled_date - state.anchor_date).num_days();
                Ok(UpcomingReview {
                    scheduled_date: slot.scheduled_date,
                    ordinal: slot.ordinal,
                    projected_retention: retention::retention(days, state.completed_reviews)?,
                })
            })
            .collect()
    }
}
