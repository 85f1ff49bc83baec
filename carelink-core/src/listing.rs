//! Marketplace job listings posted by families.

use chrono::{DateTime, Utc};
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A job posted on the marketplace.
///
/// Coordinates are WGS84. The stored position is only usable when both
/// `latitude` and `longitude` are present.
///
/// # Examples
/// ```
/// use carelink_core::Listing;
///
/// let listing = Listing::new("job-1")
///     .with_specialties(["Memory Care"])
///     .with_services(["Meal Prep"]);
/// assert_eq!(listing.requirements().count(), 2);
/// assert!(listing.stored_location().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Listing {
    /// Stable identifier assigned by the persistence layer.
    pub id: String,
    /// Stored latitude of the care location.
    pub latitude: Option<f64>,
    /// Stored longitude of the care location.
    pub longitude: Option<f64>,
    /// Start of the requested care window.
    pub start_time: Option<DateTime<Utc>>,
    /// End of the requested care window.
    pub end_time: Option<DateTime<Utc>>,
    /// Specialties the family is looking for.
    pub specialties: Vec<String>,
    /// Services the family needs.
    pub services: Vec<String>,
    /// Care types the family needs.
    pub care_types: Vec<String>,
    /// Lowest acceptable hourly rate.
    pub hourly_rate_min: Option<f64>,
    /// Highest acceptable hourly rate.
    pub hourly_rate_max: Option<f64>,
}

impl Listing {
    /// Construct a listing with no requirements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Replace the requested specialties.
    #[must_use]
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the requested services.
    #[must_use]
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the requested care types.
    #[must_use]
    pub fn with_care_types<I, S>(mut self, care_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.care_types = care_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stored position.
    #[must_use]
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the requested care window.
    #[must_use]
    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the acceptable hourly rate band. Either bound may be absent.
    #[must_use]
    pub fn with_rate_band(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.hourly_rate_min = min;
        self.hourly_rate_max = max;
        self
    }

    /// Iterate over specialties, services and care types in that order.
    pub fn requirements(&self) -> impl Iterator<Item = &str> {
        self.specialties
            .iter()
            .chain(&self.services)
            .chain(&self.care_types)
            .map(String::as_str)
    }

    /// Stored position as a coordinate (`x = longitude`, `y = latitude`).
    pub fn stored_location(&self) -> Option<Coord<f64>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coord { x: lng, y: lat }),
            _ => None,
        }
    }

    /// Requested care window when both ends are present.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.start_time.zip(self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn requirements_chain_all_lists() {
        let listing = Listing::new("l")
            .with_specialties(["a"])
            .with_services(["b", "c"])
            .with_care_types(["d"]);
        let collected: Vec<&str> = listing.requirements().collect();
        assert_eq!(collected, ["a", "b", "c", "d"]);
    }

    #[test]
    fn stored_location_needs_both_axes() {
        let mut listing = Listing::new("l");
        listing.latitude = Some(40.0);
        assert!(listing.stored_location().is_none());
        listing.longitude = Some(-73.0);
        assert_eq!(listing.stored_location(), Some(Coord { x: -73.0, y: 40.0 }));
    }

    #[test]
    fn window_needs_both_ends() {
        let start = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).single().expect("valid start");
        let mut listing = Listing::new("l");
        listing.start_time = Some(start);
        assert!(listing.window().is_none());
        listing.end_time = Some(start);
        assert_eq!(listing.window(), Some((start, start)));
    }
}
