//! Core domain types for the CareLink matching engine.
//!
//! Records mirror what the persistence layer hands over: caregivers,
//! marketplace listings, availability slots, reviews, and assisted-living
//! homes. Scoring implementations live in `carelink-scorer`; this crate
//! defines the [`MatchScorer`] seam and the result types they produce.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod caregiver;
mod error;
pub mod home;
mod listing;
mod options;
mod score;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use caregiver::{AvailabilitySlot, Caregiver, CaregiverCandidate, CaregiverReview};
pub use error::{ReviewError, ScoringError};
pub use home::{
    CareLevel, FamilyPreferences, HomeFactorScores, HomeListing, HomeScore, UnknownCareLevel,
};
pub use listing::Listing;
pub use options::{DEFAULT_MAX_DISTANCE_MILES, ScoringOptions, WeightOverrides};
pub use score::{Factor, FactorOutcome, FactorScore, MatchScore};
pub use scorer::{MAX_SCORE, MatchScorer};

/// Geographic position with `x = longitude` and `y = latitude`.
pub type Coordinate = geo::Coord<f64>;
