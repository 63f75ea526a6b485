//! Property-Based Tests for the Scheduling Engine
//!
//! Tests the following invariants:
//! - Interval curve: strictly increasing offsets, constant 30-day tail
//! - Retention: always in [0, 1], monotone in both arguments
//! - Schedule: exact length, strictly increasing dates, contiguous ordinals
//! - Generation: idempotent, shared review_count stamp, never completed
//! - Lifecycle: completion always flips the flag and advances the count

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use review_engine::{
    complete_review, curve::offset, generate_for, retention, schedule::build_schedule,
    schedule::future_review_dates, CourseId, MaterialId, ReviewEntry, Subject,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_subject() -> impl Strategy<Value = Subject> {
    (1i64..=1000, proptest::option::of(1i64..=1000)).prop_map(|(course, material)| Subject {
        course: CourseId(course),
        material: material.map(MaterialId),
    })
}

fn arb_count() -> impl Strategy<Value = i64> {
    0i64..=200
}

// ============================================================================
// Interval curve
// ============================================================================

proptest! {
    #[test]
    fn offset_strictly_increasing(k in 0u32..=10_000) {
        prop_assert!(offset(k + 1) > offset(k));
    }

    #[test]
    fn offset_tail_is_constant_30(k in 6u32..=10_000) {
        prop_assert_eq!(offset(k + 1) - offset(k), 30);
    }

    #[test]
    fn retention_stays_in_unit_interval(days in -10i64..=100_000, count in arb_count()) {
        let r = retention(days, count).unwrap();
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn retention_monotone_decreasing_in_days(days in 0i64..=100_000, count in arb_count()) {
        let today = retention(days, count).unwrap();
        let tomorrow = retention(days + 1, count).unwrap();
        prop_assert!(tomorrow <= today);
    }

    #[test]
    fn retention_monotone_increasing_in_reviews(days in 0i64..=100_000, count in 0i64..=199) {
        let fewer = retention(days, count).unwrap();
        let more = retention(days, count + 1).unwrap();
        prop_assert!(more >= fewer);
    }
}

// ============================================================================
// Schedule calculation
// ============================================================================

proptest! {
    #[test]
    fn future_dates_exact_length_and_increasing(
        anchor in arb_date(),
        count in arb_count(),
        n in 0usize..=12,
    ) {
        let dates = future_review_dates(anchor, count, n).unwrap();
        prop_assert_eq!(dates.len(), n);
        prop_assert!(dates.windows(2).all(|p| p[0] < p[1]));
        prop_assert!(dates.iter().all(|d| *d > anchor));
    }

    #[test]
    fn build_schedule_ordinals_contiguous(
        anchor in arb_date(),
        count in arb_count(),
        n in 1usize..=12,
    ) {
        let slots = build_schedule(anchor, count, n).unwrap();
        for (i, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.ordinal, count + i as i64 + 1);
        }
    }
}

// ============================================================================
// Generation + lifecycle
// ============================================================================

proptest! {
    #[test]
    fn generation_is_idempotent(
        subject in arb_subject(),
        anchor in arb_date(),
        count in arb_count(),
        n in 1usize..=8,
    ) {
        let first = generate_for(&subject, anchor, count, &HashSet::new(), n).unwrap();
        prop_assert_eq!(first.len(), n);
        prop_assert!(first.iter().all(|e| !e.completed));
        prop_assert!(first.iter().all(|e| e.review_count == count));

        let existing: HashSet<NaiveDate> = first.iter().map(|e| e.scheduled_date).collect();
        let second = generate_for(&subject, anchor, count, &existing, n).unwrap();
        prop_assert!(second.is_empty());
    }

    #[test]
    fn completion_flips_flag_and_advances(
        subject in arb_subject(),
        anchor in arb_date(),
        count in arb_count(),
    ) {
        let entry = ReviewEntry {
            subject,
            scheduled_date: anchor,
            ordinal: count + 1,
            review_count: count,
            completed: false,
        };
        let outcome = complete_review(&entry, anchor, count, &HashSet::new()).unwrap();
        prop_assert!(outcome.entry.completed);
        prop_assert_eq!(outcome.next_count, count + 1);

        // the follow-on always lands strictly after the anchor, exactly
        // at the curve's next offset
        let next = outcome.next.unwrap();
        prop_assert_eq!((next.scheduled_date - anchor).num_days(), offset(count as u32 + 1));
        prop_assert!(!next.completed);
    }

    #[test]
    fn completion_suppresses_duplicate_follow_on(
        subject in arb_subject(),
        anchor in arb_date(),
        count in arb_count(),
    ) {
        let entry = ReviewEntry {
            subject,
            scheduled_date: anchor,
            ordinal: count + 1,
            review_count: count,
            completed: false,
        };
        let free = complete_review(&entry, anchor, count, &HashSet::new()).unwrap();
        let taken: HashSet<NaiveDate> =
            [free.next.unwrap().scheduled_date].into_iter().collect();
        let blocked = complete_review(&entry, anchor, count, &taken).unwrap();
        prop_assert!(blocked.next.is_none());
        prop_assert!(blocked.entry.completed);
    }
}
