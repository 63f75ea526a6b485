//! Engine error types

/// Errors surfaced by the scheduling engine.
///
/// The engine is pure arithmetic over well-typed inputs, so the taxonomy
/// is narrow: once inputs pass validation, no runtime failure path exists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// A negative completed-review count is a caller programming error;
    /// the recurrence formula is undefined for negative indices, so the
    /// engine rejects rather than clamps.
    #[error("invalid completed-review count: {count} (must be >= 0)")]
    InvalidCount { count: i64 },

    /// No anchor date could be derived: the subject has no study history.
    /// Callers must record at least one study session before scheduling.
    #[error("no study history for subject, cannot derive anchor date")]
    MissingAnchor,

    /// The computed date offset overflows the calendar range.
    #[error("scheduled date out of calendar range (anchor {anchor}, offset {offset_days} days)")]
    DateOutOfRange {
        anchor: chrono::NaiveDate,
        offset_days: i64,
    },
}

/// Validates a caller-supplied completed-review count.
pub(crate) fn validate_count(count: i64) -> Result<u32, EngineError> {
    u32::try_from(count).map_err(|_| EngineError::InvalidCount { count })
}
