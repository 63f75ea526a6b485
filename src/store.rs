//! Storage collaborator
//!
//! The engine never touches a database; everything it needs from
//! persistent state comes through [`StudyStore`], and everything it
//! produces goes back out as plain values for the caller to persist.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::types::{ReviewEntry, Subject};

/// Read-side queries the engine needs from the surrounding application's
/// storage layer.
pub trait StudyStore {
    /// Date of the most recent study activity for the subject, if any.
    /// `None` means the subject has no study history and cannot be
    /// scheduled yet.
    fn most_recent_study_date(&self, subject: &Subject) -> Option<NaiveDate>;

    /// Every date that already has a review entry for the subject,
    /// completed or not. Used as the dedup pre-filter.
    fn scheduled_dates_for(&self, subject: &Subject) -> HashSet<NaiveDate>;

    /// The subject's authoritative completed-review count, updated
    /// exactly once per completion event.
    fn completed_review_count_for(&self, subject: &Subject) -> i64;
}

/// Simple `HashMap`-backed store. Backs the test suite and embedders
/// that keep schedules in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    study_dates: HashMap<Subject, Vec<NaiveDate>>,
    entries: HashMap<Subject, Vec<ReviewEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a study session for the subject.
    pub fn record_study(&mut self, subject: Subject, date: NaiveDate) {
        self.study_dates.entry(subject).or_default().push(date);
    }

    /// Inserts a review entry unless its date is already scheduled for
    /// the subject. Returns whether the entry was inserted; this is the
    /// "insert if absent" contract a real storage layer implements with
    /// a uniqueness constraint on `(subject, scheduled_date)`.
    pub fn insert_entry(&mut self, entry: ReviewEntry) -> bool {
        let entries = self.entries.entry(entry.subject).or_default();
        if entries
            .iter()
            .any(|e| e.scheduled_date == entry.scheduled_date)
        {
            return false;
        }
        entries.push(entry);
        true
    }

    /// Replaces the stored entry matching `entry`'s scheduled date.
    pub fn update_entry(&mut self, entry: ReviewEntry) {
        if let Some(entries) = self.entries.get_mut(&entry.subject) {
            if let Some(slot) = entries
                .iter_mut()
                .find(|e| e.scheduled_date == entry.scheduled_date)
            {
                *slot = entry;
            }
        }
    }

    pub fn entries_for(&self, subject: &Subject) -> &[ReviewEntry] {
        self.entries.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl StudyStore for InMemoryStore {
    fn most_recent_study_date(&self, subject: &Subject) -> Option<NaiveDate> {
        self.study_dates
            .get(subject)
            .and_then(|dates| dates.iter().max())
            .copied()
    }

    fn scheduled_dates_for(&self, subject: &Subject) -> HashSet<NaiveDate> {
        self.entries_for(subject)
            .iter()
            .map(|e| e.scheduled_date)
            .collect()
    }

    fn completed_review_count_for(&self, subject: &Subject) -> i64 {
        self.entries_for(subject)
            .iter()
            .filter(|e| e.completed)
            .count() as i64
    }
}
