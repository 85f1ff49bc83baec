//! Average star rating.

use carelink_core::{CaregiverReview, FactorOutcome};

const NO_REVIEWS_SCORE: f64 = 50.0;
const MAX_STARS: f64 = 5.0;

/// Map the average star rating onto `0..=100` (one star is 20 points).
///
/// Caregivers without reviews score a neutral 50 rather than being
/// penalised.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the rating is an average of small integers"
)]
#[must_use]
pub fn score_rating(reviews: Option<&[CaregiverReview]>) -> FactorOutcome {
    let Some(present) = reviews.filter(|list| !list.is_empty()) else {
        return FactorOutcome::new(NO_REVIEWS_SCORE, "No reviews available for caregiver");
    };
    let total: u32 = present.iter().map(|review| u32::from(review.rating())).sum();
    let count = present.len();
    let average = f64::from(total) / count as f64;
    let score = (average / MAX_STARS * 100.0).round();
    // Round ties up before formatting; `{:.1}` rounds them to even.
    let shown = (average * 10.0).round() / 10.0;
    FactorOutcome::new(
        score,
        format!("Caregiver has an average rating of {shown:.1} stars from {count} reviews"),
    )
}
