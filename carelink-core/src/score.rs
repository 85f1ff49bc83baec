//! Match results and the factors that produce them.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five signals blended into a match score.
///
/// Variants are declared in reporting order, so iterating a
/// `BTreeMap<Factor, _>` yields distance, availability, specialties, rating
/// and then rate fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Factor {
    /// Proximity between caregiver and listing.
    Distance,
    /// Overlap between declared availability and the care window.
    Availability,
    /// Overlap between caregiver specialties and listing requirements.
    Specialties,
    /// Average review rating.
    Rating,
    /// Caregiver rate against the listing's rate band.
    RateFit,
}

impl Factor {
    /// All factors in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Distance,
        Self::Availability,
        Self::Specialties,
        Self::Rating,
        Self::RateFit,
    ];

    /// Stable name used in serialized output; matches the
    /// [`WeightOverrides`](crate::WeightOverrides) field names.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::Factor;
    ///
    /// assert_eq!(Factor::RateFit.as_str(), "rate_fit");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Availability => "availability",
            Self::Specialties => "specialties",
            Self::Rating => "rating",
            Self::RateFit => "rate_fit",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single factor scorer before weighting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactorOutcome {
    /// Score in `0.0..=100.0`.
    pub score: f64,
    /// Human-readable explanation.
    pub reason: String,
}

impl FactorOutcome {
    /// Pair a score with its explanation.
    pub fn new(score: f64, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }
}

/// A factor's contribution to a [`MatchScore`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactorScore {
    /// Factor score in `0.0..=100.0`.
    pub score: f64,
    /// Normalised weight; the five weights sum to 100.
    pub weight: f64,
    /// Human-readable explanation.
    pub reason: String,
}

/// Compatibility between one caregiver and one listing.
///
/// `reasons` lists one sentence per factor in [`Factor::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchScore {
    /// Aggregate score in `0..=100`.
    pub score: u8,
    /// Explanations in factor order.
    pub reasons: Vec<String>,
    /// Per-factor breakdown.
    pub factors: BTreeMap<Factor, FactorScore>,
}

impl MatchScore {
    /// Return the breakdown for one factor.
    pub fn factor(&self, factor: Factor) -> Option<&FactorScore> {
        self.factors.get(&factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_order_matches_reporting_order() {
        let mut sorted = Factor::ALL;
        sorted.sort();
        assert_eq!(sorted, Factor::ALL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn factor_keys_match_weight_override_keys() {
        let factors: BTreeMap<Factor, FactorScore> = Factor::ALL
            .into_iter()
            .map(|factor| {
                let score = FactorScore {
                    score: 100.0,
                    weight: 20.0,
                    reason: "ok".into(),
                };
                (factor, score)
            })
            .collect();
        let overrides = crate::WeightOverrides {
            distance: Some(1.0),
            availability: Some(1.0),
            specialties: Some(1.0),
            rating: Some(1.0),
            rate_fit: Some(1.0),
        };
        let factor_json = serde_json::to_value(&factors).expect("serialise factors");
        let override_json = serde_json::to_value(overrides).expect("serialise overrides");
        let factor_keys: Vec<&String> = factor_json
            .as_object()
            .expect("factors are a map")
            .keys()
            .collect();
        let override_keys: Vec<&String> = override_json
            .as_object()
            .expect("overrides are a map")
            .keys()
            .collect();
        assert_eq!(factor_keys, override_keys);
        assert!(factor_json.get("rate_fit").is_some());
        let mut names: Vec<&str> = Factor::ALL.iter().map(|factor| factor.as_str()).collect();
        names.sort_unstable();
        assert_eq!(factor_keys, names);
    }
}
