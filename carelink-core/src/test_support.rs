//! Test-only builders shared by unit, behaviour and property tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use geo::Coord;

use crate::{AvailabilitySlot, Caregiver, CaregiverReview, Listing};

/// Monday 2025-01-06 00:00 UTC, the anchor for every fixture timestamp.
pub fn base_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Timestamp `minutes` after [`base_day`].
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    base_day() + Duration::minutes(minutes)
}

/// Timestamp at `hour:00` on [`base_day`].
pub fn at_hour(hour: i64) -> DateTime<Utc> {
    at_minute(hour * 60)
}

/// Available slot spanning `start_hour..end_hour` on [`base_day`].
pub fn slot(start_hour: i64, end_hour: i64) -> AvailabilitySlot {
    AvailabilitySlot::available(at_hour(start_hour), at_hour(end_hour))
}

/// Reviews with the given star ratings; out-of-range ratings are skipped.
pub fn reviews(ratings: &[u8]) -> Vec<CaregiverReview> {
    ratings
        .iter()
        .filter_map(|rating| CaregiverReview::new(*rating).ok())
        .collect()
}

/// Coordinate from latitude and longitude.
pub const fn lat_lng(lat: f64, lng: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

/// Caregiver specialising in memory care at $25/hr.
pub fn memory_care_caregiver() -> Caregiver {
    Caregiver::new("caregiver-1")
        .with_specialties(["Memory Care"])
        .with_hourly_rate(25.0)
}

/// Listing for memory care paying $20-$30/hr with no window or position.
pub fn memory_care_listing() -> Listing {
    Listing::new("listing-1")
        .with_specialties(["Memory Care"])
        .with_rate_band(Some(20.0), Some(30.0))
}
