//! # review-engine - spaced-repetition scheduling engine
//!
//! Pure Rust implementation of the scheduling core behind a course-study
//! tracker:
//!
//! - **Interval curve** - Ebbinghaus-style review recurrence: a bounded
//!   table of widening intervals, then a fixed 30-day tail
//! - **Schedule calculation** - concrete future review dates from an
//!   anchor date and a completed-review count
//! - **Retention estimation** - heuristic [0, 1] memory-retention figure
//! - **Schedule generation** - idempotent batch creation of review
//!   entries, deduplicated against existing ones
//! - **Review lifecycle** - completion events that advance the count and
//!   schedule the follow-on review
//!
//! The engine is synchronous and stateless: every operation is a
//! deterministic function of its explicit inputs. Persistence, the web
//! layer, and UI live outside; storage is reached only through the
//! [`StudyStore`] trait, and proposed entries are returned as plain
//! values for the caller to persist.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use review_engine::{CourseId, InMemoryStore, ReviewEngine, Subject};
//!
//! let subject = Subject::course(CourseId(1));
//! let mut store = InMemoryStore::new();
//! store.record_study(subject, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//!
//! let mut engine = ReviewEngine::new(store);
//! let batch = engine.generate(&subject).unwrap();
//! assert_eq!(batch.len(), 3);
//! for entry in batch {
//!     engine.store_mut().insert_entry(entry);
//! }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod curve;
pub mod engine;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod retention;
pub mod schedule;
pub mod store;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all public types and constants
pub use types::*;

/// Re-export the error type
pub use error::EngineError;

/// Re-export the interval curve
pub use curve::offset;

/// Re-export schedule calculation and due checks
pub use schedule::{build_schedule, future_review_dates, is_due_now, is_due_on, next_review_date};

/// Re-export retention estimation
pub use retention::retention;

/// Re-export batch generation
pub use generator::generate_for;

/// Re-export completion handling
pub use lifecycle::complete_review;

/// Re-export the storage collaborator
pub use store::{InMemoryStore, StudyStore};

/// Re-export the orchestrator
pub use engine::{ReviewEngine, UpcomingReview};
