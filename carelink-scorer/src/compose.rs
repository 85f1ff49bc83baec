//! Blend the five factor scores into a [`MatchScore`].

use std::collections::BTreeMap;

use carelink_core::{
    Caregiver, Factor, FactorOutcome, FactorScore, Listing, MAX_SCORE, MatchScore, MatchScorer,
    ScoringError, ScoringOptions,
};
use log::debug;

use crate::{
    FactorWeights, score_availability, score_distance, score_rate_fit, score_rating,
    score_specialties, second_person,
};

/// Scores caregiver/listing pairs with the marketplace's five-factor model.
///
/// Reasons are phrased for the family reviewing a caregiver. Use
/// [`score_listing_for_caregiver`] for caregiver-facing wording.
///
/// # Examples
/// ```
/// use carelink_core::{Caregiver, Listing, MatchScorer, ScoringOptions};
/// use carelink_scorer::MarketplaceScorer;
///
/// let caregiver = Caregiver::new("c").with_specialties(["Memory Care"]).with_hourly_rate(25.0);
/// let listing = Listing::new("l")
///     .with_specialties(["Memory Care"])
///     .with_rate_band(Some(20.0), Some(30.0));
/// let score = MarketplaceScorer
///     .score(&caregiver, &listing, &ScoringOptions::new())
///     .expect("default weights are valid");
/// assert_eq!(score.score, 76);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketplaceScorer;

impl MatchScorer for MarketplaceScorer {
    fn score(
        &self,
        caregiver: &Caregiver,
        listing: &Listing,
        options: &ScoringOptions,
    ) -> Result<MatchScore, ScoringError> {
        let weights = FactorWeights::normalise(&options.weights)?;
        let outcomes = [
            (
                Factor::Distance,
                score_distance(
                    options.caregiver_location,
                    options.listing_location,
                    listing.stored_location(),
                    options.max_distance,
                ),
            ),
            (
                Factor::Availability,
                score_availability(listing, options.caregiver_availability.as_deref()),
            ),
            (
                Factor::Specialties,
                score_specialties(&caregiver.specialties, listing.requirements()),
            ),
            (
                Factor::Rating,
                score_rating(options.caregiver_reviews.as_deref()),
            ),
            (
                Factor::RateFit,
                score_rate_fit(
                    caregiver.hourly_rate,
                    listing.hourly_rate_min,
                    listing.hourly_rate_max,
                ),
            ),
        ];
        let result = combine(outcomes, &weights);
        debug!(
            "caregiver {} scored {} against listing {}",
            caregiver.id, result.score, listing.id
        );
        Ok(result)
    }
}

fn combine(outcomes: [(Factor, FactorOutcome); 5], weights: &FactorWeights) -> MatchScore {
    let mut reasons = Vec::with_capacity(outcomes.len());
    let mut factors = BTreeMap::new();
    for (factor, outcome) in outcomes {
        let score = MarketplaceScorer::sanitise(outcome.score);
        reasons.push(outcome.reason.clone());
        factors.insert(
            factor,
            FactorScore {
                score,
                weight: weights.get(factor),
                reason: outcome.reason,
            },
        );
    }
    MatchScore {
        score: aggregate(&factors),
        reasons,
        factors,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the aggregate is a weighted mean of factor scores"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to 0..=100 before the cast"
)]
fn aggregate(factors: &BTreeMap<Factor, FactorScore>) -> u8 {
    let weighted: f64 = factors
        .values()
        .map(|factor| factor.score * factor.weight / 100.0)
        .sum();
    weighted.round().clamp(0.0, MAX_SCORE) as u8
}

/// Score how well `caregiver` fits `listing`, with reasons addressed to the
/// family.
///
/// # Errors
/// Returns [`ScoringError::InvalidWeights`] when the weight overrides cannot
/// be normalised.
pub fn score_caregiver_for_listing(
    caregiver: &Caregiver,
    listing: &Listing,
    options: &ScoringOptions,
) -> Result<MatchScore, ScoringError> {
    MarketplaceScorer.score(caregiver, listing, options)
}

/// Score how well `listing` suits `caregiver`, with reasons addressed to the
/// caregiver.
///
/// The score and factor values are identical to
/// [`score_caregiver_for_listing`]; only the wording of the reasons differs.
///
/// # Errors
/// Returns [`ScoringError::InvalidWeights`] when the weight overrides cannot
/// be normalised.
pub fn score_listing_for_caregiver(
    listing: &Listing,
    caregiver: &Caregiver,
    options: &ScoringOptions,
) -> Result<MatchScore, ScoringError> {
    let family_facing = MarketplaceScorer.score(caregiver, listing, options)?;
    Ok(MatchScore {
        reasons: family_facing
            .reasons
            .iter()
            .map(|reason| second_person(reason))
            .collect(),
        ..family_facing
    })
}
