//! Score caregiver/listing pairs.
//!
//! The `MatchScorer` trait assigns a [`MatchScore`](crate::MatchScore) to a
//! [`Caregiver`](crate::Caregiver) and [`Listing`](crate::Listing) pair given
//! optional [`ScoringOptions`](crate::ScoringOptions).

use crate::{Caregiver, Listing, MatchScore, ScoringError, ScoringOptions};

/// Upper bound for every factor and aggregate score.
pub const MAX_SCORE: f64 = 100.0;

/// Calculate the compatibility of a caregiver with a listing.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so batch ranking can
/// fan out across threads. Missing optional data must degrade to a neutral
/// factor score rather than an error; the only failure is an unusable weight
/// configuration.
///
/// Implementations must:
/// - Produce finite factor scores.
/// - Clamp factor scores to `0.0..=100.0` before weighting.
///
/// Use [`MatchScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use carelink_core::{
///     Caregiver, Listing, MatchScore, MatchScorer, ScoringError, ScoringOptions,
/// };
///
/// struct Neutral;
///
/// impl MatchScorer for Neutral {
///     fn score(
///         &self,
///         _caregiver: &Caregiver,
///         _listing: &Listing,
///         _options: &ScoringOptions,
///     ) -> Result<MatchScore, ScoringError> {
///         Ok(MatchScore { score: 50, reasons: Vec::new(), factors: BTreeMap::new() })
///     }
/// }
///
/// let result = Neutral
///     .score(&Caregiver::new("c"), &Listing::new("l"), &ScoringOptions::new())
///     .expect("neutral scorer never fails");
/// assert_eq!(result.score, 50);
/// ```
pub trait MatchScorer: Send + Sync {
    /// Return the match score for `caregiver` against `listing`.
    fn score(
        &self,
        caregiver: &Caregiver,
        listing: &Listing,
        options: &ScoringOptions,
    ) -> Result<MatchScore, ScoringError>;

    /// Clamp and validate a raw factor score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
