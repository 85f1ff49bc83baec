//! Scoring for the CareLink marketplace.
//!
//! The crate provides two complementary capabilities:
//! - **Caregiver/listing matching** blends five factors (distance,
//!   availability, specialties, rating and rate fit) into a `0..=100` score
//!   with one human-readable reason per factor. [`MarketplaceScorer`]
//!   implements the [`MatchScorer`](carelink_core::MatchScorer) trait, and
//!   [`rank_caregivers_for_listing`] and [`rank_listings_for_caregiver`]
//!   score whole batches.
//! - **Resident/home fit** scores assisted-living homes against a family's
//!   budget, medical conditions, care level, postal code and lifestyle.
//!
//! Every function is pure. Missing inputs degrade to neutral factor scores;
//! the only error is an unusable weight configuration.
//!
//! # Examples
//!
//! ```
//! use carelink_core::{Caregiver, Listing, ScoringOptions};
//! use carelink_scorer::{score_caregiver_for_listing, score_listing_for_caregiver};
//!
//! let caregiver = Caregiver::new("cg-1")
//!     .with_specialties(["Memory Care"])
//!     .with_hourly_rate(25.0);
//! let listing = Listing::new("job-1")
//!     .with_specialties(["Memory Care"])
//!     .with_rate_band(Some(20.0), Some(30.0));
//!
//! let family_view = score_caregiver_for_listing(&caregiver, &listing, &ScoringOptions::new())
//!     .expect("default weights are valid");
//! let caregiver_view = score_listing_for_caregiver(&listing, &caregiver, &ScoringOptions::new())
//!     .expect("default weights are valid");
//! assert_eq!(family_view.score, 76);
//! assert_eq!(family_view.score, caregiver_view.score);
//! ```

#![forbid(unsafe_code)]

mod availability;
mod compose;
mod distance;
mod homes;
mod perspective;
mod rank;
mod rate_fit;
mod rating;
mod specialty;
mod weights;

pub use availability::{has_time_overlap, minutes_between, score_availability};
pub use compose::{MarketplaceScorer, score_caregiver_for_listing, score_listing_for_caregiver};
pub use distance::{EARTH_RADIUS_MILES, haversine_miles, proximity_score, score_distance};
pub use homes::{DEFAULT_HOME_LIMIT, find_matching_homes, score_home};
pub use perspective::second_person;
pub use rank::{RankOptions, RankedMatch, rank_caregivers_for_listing, rank_listings_for_caregiver};
pub use rate_fit::score_rate_fit;
pub use rating::score_rating;
pub use specialty::score_specialties;
pub use weights::{DEFAULT_WEIGHTS, FactorWeights};
