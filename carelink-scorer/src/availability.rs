//! Coverage of a listing's care window by a caregiver's declared slots.
//!
//! Overlapping slots are summed independently rather than merged, so two
//! slots covering the same hour count that hour twice. Coverage is capped at
//! 100% afterwards, which keeps the score bounded.

use carelink_core::{AvailabilitySlot, FactorOutcome, Listing};
use chrono::{DateTime, Utc};
use log::warn;

const NO_WINDOW_SCORE: f64 = 75.0;
const UNKNOWN_SCORE: f64 = 50.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Report whether `[start_a, end_a)` and `[start_b, end_b)` intersect.
///
/// Ranges that merely touch do not overlap.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use carelink_scorer::has_time_overlap;
///
/// let nine = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
/// let noon = Utc.with_ymd_and_hms(2025, 1, 6, 12, 0, 0).unwrap();
/// let five = Utc.with_ymd_and_hms(2025, 1, 6, 17, 0, 0).unwrap();
/// assert!(has_time_overlap(nine, five, noon, five));
/// assert!(!has_time_overlap(nine, noon, noon, five));
/// ```
#[must_use]
pub fn has_time_overlap(
    start_a: DateTime<Utc>,
    end_a: DateTime<Utc>,
    start_b: DateTime<Utc>,
    end_b: DateTime<Utc>,
) -> bool {
    start_a < end_b && start_b < end_a
}

/// Minutes from `start` to `end`, or zero when `end` is not after `start`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "durations are reported as fractional minutes"
)]
#[must_use]
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0.0;
    }
    millis as f64 / MILLIS_PER_MINUTE
}

/// Score how much of the listing's window the caregiver can cover.
///
/// Listings without a full window score 75 and an unknown schedule scores 50.
/// When no available slot overlaps the window the score is 0.
#[expect(
    clippy::float_arithmetic,
    reason = "coverage is a ratio of covered minutes"
)]
#[must_use]
pub fn score_availability(listing: &Listing, slots: Option<&[AvailabilitySlot]>) -> FactorOutcome {
    let Some((listing_start, listing_end)) = listing.window() else {
        return FactorOutcome::new(NO_WINDOW_SCORE, "Listing has no specific time requirements");
    };
    let total_minutes = minutes_between(listing_start, listing_end);
    if total_minutes <= 0.0 {
        warn!(
            "listing {} has an empty or inverted care window; treating it as unconstrained",
            listing.id
        );
        return FactorOutcome::new(NO_WINDOW_SCORE, "Listing has no specific time requirements");
    }

    let declared = slots.unwrap_or_default();
    if declared.is_empty() {
        return FactorOutcome::new(
            UNKNOWN_SCORE,
            "Caregiver availability information not provided",
        );
    }

    let overlapping: Vec<&AvailabilitySlot> = declared
        .iter()
        .filter(|slot| {
            slot.is_available
                && has_time_overlap(slot.start_time, slot.end_time, listing_start, listing_end)
        })
        .collect();
    if overlapping.is_empty() {
        return FactorOutcome::new(0.0, "Caregiver is not available during the requested time");
    }

    let covered_minutes: f64 = overlapping
        .iter()
        .map(|slot| {
            minutes_between(
                slot.start_time.max(listing_start),
                slot.end_time.min(listing_end),
            )
        })
        .sum();
    let coverage = (covered_minutes * 100.0 / total_minutes).min(100.0);
    coverage_outcome(coverage)
}

#[expect(
    clippy::float_cmp,
    reason = "coverage is capped with min(100.0) so full coverage is exact"
)]
fn coverage_outcome(coverage: f64) -> FactorOutcome {
    let percent = coverage.round();
    if coverage == 100.0 {
        FactorOutcome::new(
            100.0,
            "Caregiver is fully available during the requested time",
        )
    } else if coverage >= 75.0 {
        FactorOutcome::new(
            85.0,
            format!("Caregiver is available for {percent}% of the requested time"),
        )
    } else if coverage >= 50.0 {
        FactorOutcome::new(
            60.0,
            format!("Caregiver is available for {percent}% of the requested time"),
        )
    } else {
        FactorOutcome::new(
            30.0,
            format!("Caregiver is only available for {percent}% of the requested time"),
        )
    }
}
