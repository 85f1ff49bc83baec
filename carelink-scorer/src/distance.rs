//! Proximity between a caregiver and a listing.

use carelink_core::{Coordinate, DEFAULT_MAX_DISTANCE_MILES, FactorOutcome};
use log::warn;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Score awarded at the edge of the search radius.
const BOUNDARY_SCORE: f64 = 20.0;

/// Score lost per mile inside the radius is `80 / max_distance`.
const IN_RADIUS_DECAY: f64 = 80.0;

/// Miles beyond the radius that cost one point.
const MILES_PER_POINT_OUTSIDE: f64 = 10.0;

/// Neutral score used when either position is unknown.
const NEUTRAL_SCORE: f64 = 50.0;

/// Great-circle distance in miles using the Haversine formula.
///
/// Coordinates use `x = longitude` and `y = latitude`, in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carelink_scorer::haversine_miles;
///
/// let here = Coord { x: -73.9857, y: 40.7484 };
/// assert!(haversine_miles(here, here).abs() < 1e-9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is trigonometric"
)]
#[must_use]
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lng = (to.x - from.x).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + from.y.to_radians().cos() * to.y.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_MILES * angle
}

/// Convert a distance into a proximity score.
///
/// Decays linearly from 100 at zero miles to 20 at `max_distance`, then keeps
/// losing a point every ten miles until it reaches 0.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays linearly with distance"
)]
#[must_use]
pub fn proximity_score(distance: f64, max_distance: f64) -> f64 {
    if distance <= max_distance {
        (100.0 - (distance / max_distance) * IN_RADIUS_DECAY).clamp(0.0, 100.0)
    } else {
        (BOUNDARY_SCORE - (distance - max_distance) / MILES_PER_POINT_OUTSIDE).max(0.0)
    }
}

/// Score the distance between caregiver and listing.
///
/// The listing position resolves to `listing_override` first and then to the
/// stored position. A missing listing position is reported before a missing
/// caregiver position. Non-positive or non-finite radii fall back to
/// [`DEFAULT_MAX_DISTANCE_MILES`].
#[must_use]
pub fn score_distance(
    caregiver: Option<Coordinate>,
    listing_override: Option<Coordinate>,
    listing_stored: Option<Coordinate>,
    max_distance: Option<f64>,
) -> FactorOutcome {
    let Some(listing) = listing_override.or(listing_stored) else {
        return FactorOutcome::new(NEUTRAL_SCORE, "Location information unavailable for listing");
    };
    let Some(caregiver_position) = caregiver else {
        return FactorOutcome::new(
            NEUTRAL_SCORE,
            "Location information unavailable for caregiver",
        );
    };

    let radius = resolve_radius(max_distance);
    let distance = haversine_miles(caregiver_position, listing);
    let score = proximity_score(distance, radius);
    let miles = distance.round();
    let reason = if distance <= radius {
        format!("{miles} miles from listing location (within {radius} mile radius)")
    } else {
        format!("{miles} miles from listing location (outside preferred {radius} mile radius)")
    };
    FactorOutcome::new(score, reason)
}

fn resolve_radius(max_distance: Option<f64>) -> f64 {
    match max_distance {
        Some(radius) if radius.is_finite() && radius > 0.0 => radius,
        Some(radius) => {
            warn!(
                "ignoring unusable search radius {radius}; using {DEFAULT_MAX_DISTANCE_MILES} miles"
            );
            DEFAULT_MAX_DISTANCE_MILES
        }
        None => DEFAULT_MAX_DISTANCE_MILES,
    }
}
