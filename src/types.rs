//! Common Types and Constants
//!
//! Shared data structures used across all engine modules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Review intervals (days between consecutive reviews) for the first six
/// reviews, following the Ebbinghaus forgetting curve
pub const REVIEW_INTERVALS: [i64; 6] = [1, 2, 4, 8, 15, 30];

/// Fixed interval (days) for every review past the sixth
pub const LONG_TERM_INTERVAL: i64 = 30;

/// Default number of future review dates to compute
pub const DEFAULT_FUTURE_REVIEWS: usize = 5;

/// Default number of review entries materialized per generation batch
pub const DEFAULT_GENERATED_ENTRIES: usize = 3;

/// Retention one day after study, with no completed reviews
pub const RETENTION_DAY_1: f64 = 0.26;

/// Retention within the first week (days 2-7)
pub const RETENTION_WEEK_1: f64 = 0.23;

/// Retention within the first month (days 8-30)
pub const RETENTION_MONTH_1: f64 = 0.21;

/// Daily retention decay applied beyond day 30
pub const RETENTION_DAILY_DECAY: f64 = 0.001;

/// Retention never drops below this floor
pub const RETENTION_FLOOR: f64 = 0.1;

/// Flat retention boost per completed review
pub const RETENTION_REVIEW_BOOST: f64 = 0.15;

// ==================== Subject ====================

/// Opaque course key, assigned by the surrounding application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

/// Opaque study-material key, assigned by the surrounding application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub i64);

/// What a review schedule is tracked against: a course, optionally
/// narrowed to one of its materials.
///
/// `material` is an explicit `Option` so that subject identity (and thus
/// schedule deduplication) is a plain equality comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub course: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialId>,
}

impl Subject {
    /// Subject covering a whole course
    pub fn course(course: CourseId) -> Self {
        Self {
            course,
            material: None,
        }
    }

    /// Subject narrowed to a single material within a course
    pub fn material(course: CourseId, material: MaterialId) -> Self {
        Self {
            course,
            material: Some(material),
        }
    }
}

// ==================== Review records ====================

/// Transient scheduling input for a subject: the most recent study date
/// and how many reviews have already been completed. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnchor {
    pub subject: Subject,
    /// Date of the most recent study activity for the subject
    pub anchor_date: NaiveDate,
    /// Count of review entries already marked complete
    pub completed_reviews: i64,
}

/// One scheduled review, as persisted by the caller.
///
/// For a given subject no two entries may share a `scheduled_date`; the
/// engine's dedup check is a pre-filter only, the storage layer must
/// enforce uniqueness on `(subject, scheduled_date)` and treat a
/// violation on insert as "entry already exists".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub subject: Subject,
    pub scheduled_date: NaiveDate,
    /// Sequence label: "this is review #N since learning began".
    /// Not required to be contiguous.
    pub ordinal: i64,
    /// Completed-review count of the subject at the time this entry was
    /// generated. Every entry of one generation batch carries the same
    /// value; the count only advances on actual completion.
    pub review_count: i64,
    pub completed: bool,
}

/// One element of a computed schedule: a date paired with its ordinal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub scheduled_date: NaiveDate,
    pub ordinal: i64,
}

/// Result of handling a "review completed" event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    /// The input entry with `completed` flipped to true
    pub entry: ReviewEntry,
    /// Follow-on entry to persist, unless its date was already scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ReviewEntry>,
    /// Authoritative completed-review count after this event
    pub next_count: i64,
}
