//! Caregiver-side records: profile, availability and reviews.

use chrono::{DateTime, Utc};
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ReviewError;

/// A caregiver offering services on the marketplace.
///
/// # Examples
/// ```
/// use carelink_core::Caregiver;
///
/// let caregiver = Caregiver::new("cg-1")
///     .with_specialties(["Memory Care"])
///     .with_hourly_rate(25.0);
/// assert_eq!(caregiver.hourly_rate, Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Caregiver {
    /// Stable identifier assigned by the persistence layer.
    pub id: String,
    /// Free-form specialties such as "Dementia Care".
    #[cfg_attr(feature = "serde", serde(default))]
    pub specialties: Vec<String>,
    /// Requested hourly rate in dollars.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hourly_rate: Option<f64>,
}

impl Caregiver {
    /// Construct a caregiver with no specialties and no rate.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Replace the specialties while returning `self` for chaining.
    #[must_use]
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hourly rate while returning `self` for chaining.
    #[must_use]
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }
}

/// A window in which a caregiver declared themselves available or busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailabilitySlot {
    /// Inclusive start of the slot.
    pub start_time: DateTime<Utc>,
    /// Exclusive end of the slot.
    pub end_time: DateTime<Utc>,
    /// Whether the slot marks the caregiver as available.
    pub is_available: bool,
}

impl AvailabilitySlot {
    /// Construct an available slot.
    pub const fn available(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            is_available: true,
        }
    }

    /// Construct a slot the caregiver has blocked out.
    pub const fn unavailable(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            is_available: false,
        }
    }
}

/// A single star rating left for a caregiver.
///
/// # Examples
/// ```
/// use carelink_core::CaregiverReview;
///
/// assert!(CaregiverReview::new(5).is_ok());
/// assert!(CaregiverReview::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ReviewRecord"))]
pub struct CaregiverReview {
    rating: u8,
}

impl CaregiverReview {
    /// Validates and constructs a review.
    pub const fn new(rating: u8) -> Result<Self, ReviewError> {
        if rating < 1 || rating > 5 {
            return Err(ReviewError::RatingOutOfRange { rating });
        }
        Ok(Self { rating })
    }

    /// Star rating in `1..=5`.
    pub const fn rating(&self) -> u8 {
        self.rating
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ReviewRecord {
    rating: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<ReviewRecord> for CaregiverReview {
    type Error = ReviewError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        Self::new(record.rating)
    }
}

/// A caregiver together with the optional records gathered for ranking.
///
/// # Examples
/// ```
/// use carelink_core::{Caregiver, CaregiverCandidate};
///
/// let candidate = CaregiverCandidate::new(Caregiver::new("cg-7"));
/// assert!(candidate.reviews.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaregiverCandidate {
    /// Profile being ranked.
    pub caregiver: Caregiver,
    /// Declared availability, when known.
    pub availability: Option<Vec<AvailabilitySlot>>,
    /// Reviews left for the caregiver, when known.
    pub reviews: Option<Vec<CaregiverReview>>,
    /// Home position (`x = longitude`, `y = latitude`).
    pub location: Option<Coord<f64>>,
}

impl CaregiverCandidate {
    /// Wrap a caregiver with no extra records.
    pub fn new(caregiver: Caregiver) -> Self {
        Self {
            caregiver,
            ..Self::default()
        }
    }

    /// Attach availability slots.
    #[must_use]
    pub fn with_availability(mut self, slots: Vec<AvailabilitySlot>) -> Self {
        self.availability = Some(slots);
        self
    }

    /// Attach reviews.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<CaregiverReview>) -> Self {
        self.reviews = Some(reviews);
        self
    }

    /// Attach a home position.
    #[must_use]
    pub fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }
}
