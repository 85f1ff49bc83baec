//! Facade crate for the CareLink matching engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the scoring and ranking entry points.

#![forbid(unsafe_code)]

pub use carelink_core::{
    AvailabilitySlot, CareLevel, Caregiver, CaregiverCandidate, CaregiverReview, Coordinate,
    DEFAULT_MAX_DISTANCE_MILES, Factor, FactorOutcome, FactorScore, FamilyPreferences,
    HomeFactorScores, HomeListing, HomeScore, Listing, MAX_SCORE, MatchScore, MatchScorer,
    ReviewError, ScoringError, ScoringOptions, UnknownCareLevel, WeightOverrides,
};

#[cfg(feature = "scorer")]
pub use carelink_scorer::{
    DEFAULT_HOME_LIMIT, FactorWeights, MarketplaceScorer, RankOptions, RankedMatch,
    find_matching_homes, rank_caregivers_for_listing, rank_listings_for_caregiver, score_home,
    score_caregiver_for_listing, score_listing_for_caregiver,
};
