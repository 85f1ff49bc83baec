//! Errors raised while configuring or running a match.

use thiserror::Error;

/// Errors returned by the scoring entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Weight overrides could not be normalised.
    #[error("weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}

/// Errors returned by [`CaregiverReview::new`](crate::CaregiverReview::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The star rating fell outside `1..=5`.
    #[error("review rating {rating} must be between 1 and 5 stars")]
    RatingOutOfRange {
        /// Rating supplied by the caller.
        rating: u8,
    },
}
