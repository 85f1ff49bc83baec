//! Caller-tunable inputs for a single match.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AvailabilitySlot, CaregiverReview, Factor};

/// Default search radius, in miles.
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 25.0;

/// Partial weight overrides. Absent entries fall back to the defaults.
///
/// # Examples
/// ```
/// use carelink_core::{Factor, WeightOverrides};
///
/// let overrides = WeightOverrides::default().with(Factor::Rating, 40.0);
/// assert_eq!(overrides.get(Factor::Rating), Some(40.0));
/// assert_eq!(overrides.get(Factor::Distance), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightOverrides {
    /// Override for the distance factor.
    pub distance: Option<f64>,
    /// Override for the availability factor.
    pub availability: Option<f64>,
    /// Override for the specialties factor.
    pub specialties: Option<f64>,
    /// Override for the rating factor.
    pub rating: Option<f64>,
    /// Override for the rate fit factor.
    pub rate_fit: Option<f64>,
}

impl WeightOverrides {
    /// Return the override for `factor`, if any.
    pub const fn get(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::Distance => self.distance,
            Factor::Availability => self.availability,
            Factor::Specialties => self.specialties,
            Factor::Rating => self.rating,
            Factor::RateFit => self.rate_fit,
        }
    }

    /// Insert or replace an override.
    pub const fn set(&mut self, factor: Factor, weight: f64) {
        let slot = match factor {
            Factor::Distance => &mut self.distance,
            Factor::Availability => &mut self.availability,
            Factor::Specialties => &mut self.specialties,
            Factor::Rating => &mut self.rating,
            Factor::RateFit => &mut self.rate_fit,
        };
        *slot = Some(weight);
    }

    /// Add an override while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, factor: Factor, weight: f64) -> Self {
        self.set(factor, weight);
        self
    }
}

/// Optional extras supplied alongside a caregiver/listing pair.
///
/// Coordinates use `x = longitude` and `y = latitude`. A listing location
/// supplied here takes precedence over the listing's stored position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringOptions {
    /// Partial weight overrides.
    pub weights: WeightOverrides,
    /// Search radius in miles. Defaults to [`DEFAULT_MAX_DISTANCE_MILES`].
    pub max_distance: Option<f64>,
    /// Declared availability for the caregiver.
    pub caregiver_availability: Option<Vec<AvailabilitySlot>>,
    /// Reviews left for the caregiver.
    pub caregiver_reviews: Option<Vec<CaregiverReview>>,
    /// Caregiver home position.
    pub caregiver_location: Option<Coord<f64>>,
    /// Listing position overriding the stored one.
    pub listing_location: Option<Coord<f64>>,
}

impl ScoringOptions {
    /// Construct options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weight overrides.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightOverrides) -> Self {
        self.weights = weights;
        self
    }

    /// Set the search radius in miles.
    #[must_use]
    pub fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance = Some(miles);
        self
    }

    /// Set the caregiver's availability slots.
    #[must_use]
    pub fn with_availability(mut self, slots: Vec<AvailabilitySlot>) -> Self {
        self.caregiver_availability = Some(slots);
        self
    }

    /// Set the caregiver's reviews.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<CaregiverReview>) -> Self {
        self.caregiver_reviews = Some(reviews);
        self
    }

    /// Set the caregiver's position.
    #[must_use]
    pub fn with_caregiver_location(mut self, location: Coord<f64>) -> Self {
        self.caregiver_location = Some(location);
        self
    }

    /// Set a listing position that overrides the stored one.
    #[must_use]
    pub fn with_listing_location(mut self, location: Coord<f64>) -> Self {
        self.listing_location = Some(location);
        self
    }
}
