//! Batch ranking of caregivers for a listing and of listings for a caregiver.

use carelink_core::{
    CaregiverCandidate, Coordinate, Factor, Listing, MatchScore, ScoringError, ScoringOptions,
    WeightOverrides,
};
use log::debug;

use crate::{FactorWeights, score_caregiver_for_listing, score_listing_for_caregiver};

/// Options shared by every pair scored in one ranking pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankOptions {
    /// Partial weight overrides.
    pub weights: WeightOverrides,
    /// Search radius in miles.
    pub max_distance: Option<f64>,
    /// Listing position overriding the stored one. Only used when ranking
    /// caregivers for a single listing.
    pub listing_location: Option<Coordinate>,
    /// Keep matches whose availability score is zero.
    pub include_unavailable: bool,
}

impl RankOptions {
    fn scoring_options(&self, candidate: &CaregiverCandidate) -> ScoringOptions {
        ScoringOptions {
            weights: self.weights,
            max_distance: self.max_distance,
            caregiver_availability: candidate.availability.clone(),
            caregiver_reviews: candidate.reviews.clone(),
            caregiver_location: candidate.location,
            listing_location: self.listing_location,
        }
    }

    fn keeps(&self, score: &MatchScore) -> bool {
        self.include_unavailable
            || score
                .factor(Factor::Availability)
                .is_none_or(|factor| factor.score > 0.0)
    }
}

/// One entry of a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    /// Identifier of the ranked caregiver or listing.
    pub id: String,
    /// Score for the pair.
    pub score: MatchScore,
}

/// Rank `candidates` for `listing`, best first.
///
/// Candidates who cannot cover any part of the care window are dropped
/// unless [`RankOptions::include_unavailable`] is set. Ties keep their input
/// order. `limit` truncates the result after sorting.
///
/// # Errors
/// Returns [`ScoringError::InvalidWeights`] before any candidate is scored
/// when the weight overrides cannot be normalised.
///
/// # Examples
/// ```
/// use carelink_core::{Caregiver, CaregiverCandidate, Listing};
/// use carelink_scorer::{RankOptions, rank_caregivers_for_listing};
///
/// let listing = Listing::new("l").with_specialties(["Hospice"]);
/// let candidates = [
///     CaregiverCandidate::new(Caregiver::new("generalist")),
///     CaregiverCandidate::new(Caregiver::new("specialist").with_specialties(["Hospice"])),
/// ];
/// let ranked = rank_caregivers_for_listing(&listing, &candidates, &RankOptions::default(), None)
///     .expect("default weights are valid");
/// assert_eq!(ranked.first().map(|m| m.id.as_str()), Some("specialist"));
/// ```
pub fn rank_caregivers_for_listing(
    listing: &Listing,
    candidates: &[CaregiverCandidate],
    options: &RankOptions,
    limit: Option<usize>,
) -> Result<Vec<RankedMatch>, ScoringError> {
    FactorWeights::normalise(&options.weights)?;
    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let score = score_caregiver_for_listing(
            &candidate.caregiver,
            listing,
            &options.scoring_options(candidate),
        )?;
        if options.keeps(&score) {
            ranked.push(RankedMatch {
                id: candidate.caregiver.id.clone(),
                score,
            });
        }
    }
    debug!(
        "ranked {} of {} caregivers for listing {}",
        ranked.len(),
        candidates.len(),
        listing.id
    );
    Ok(finish(ranked, limit))
}

/// Rank `listings` for one caregiver, best first, with caregiver-facing
/// reasons.
///
/// Each listing is located by its stored position;
/// [`RankOptions::listing_location`] is ignored. Filtering, ordering and
/// truncation follow [`rank_caregivers_for_listing`].
///
/// # Errors
/// Returns [`ScoringError::InvalidWeights`] before any listing is scored when
/// the weight overrides cannot be normalised.
pub fn rank_listings_for_caregiver(
    candidate: &CaregiverCandidate,
    listings: &[Listing],
    options: &RankOptions,
    limit: Option<usize>,
) -> Result<Vec<RankedMatch>, ScoringError> {
    FactorWeights::normalise(&options.weights)?;
    let scoring = ScoringOptions {
        listing_location: None,
        ..options.scoring_options(candidate)
    };
    let mut ranked = Vec::with_capacity(listings.len());
    for listing in listings {
        let score = score_listing_for_caregiver(listing, &candidate.caregiver, &scoring)?;
        if options.keeps(&score) {
            ranked.push(RankedMatch {
                id: listing.id.clone(),
                score,
            });
        }
    }
    debug!(
        "ranked {} of {} listings for caregiver {}",
        ranked.len(),
        listings.len(),
        candidate.caregiver.id
    );
    Ok(finish(ranked, limit))
}

fn finish(mut ranked: Vec<RankedMatch>, limit: Option<usize>) -> Vec<RankedMatch> {
    ranked.sort_by(|left, right| right.score.score.cmp(&left.score.score));
    if let Some(max) = limit {
        ranked.truncate(max);
    }
    ranked
}
