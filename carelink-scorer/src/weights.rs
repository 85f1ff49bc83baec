//! Weight normalisation for the five match factors.

use carelink_core::{Factor, ScoringError, WeightOverrides};

/// Default weights; they already sum to 100.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    distance: 20.0,
    availability: 25.0,
    specialties: 25.0,
    rating: 15.0,
    rate_fit: 15.0,
};

/// One weight per factor.
///
/// Values produced by [`FactorWeights::normalise`] always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    /// Distance weight.
    pub distance: f64,
    /// Availability weight.
    pub availability: f64,
    /// Specialties weight.
    pub specialties: f64,
    /// Rating weight.
    pub rating: f64,
    /// Rate fit weight.
    pub rate_fit: f64,
}

impl FactorWeights {
    /// Merge `overrides` over the defaults and rescale so the weights sum to
    /// 100.
    ///
    /// An override replaces the default for its factor rather than adding to
    /// it.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when any merged weight is
    /// negative or not finite, or when every weight is zero.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::{Factor, WeightOverrides};
    /// use carelink_scorer::FactorWeights;
    ///
    /// let overrides = WeightOverrides::default().with(Factor::Distance, 120.0);
    /// let weights = FactorWeights::normalise(&overrides).expect("valid weights");
    /// assert!((weights.get(Factor::Distance) - 60.0).abs() < 1e-9);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides each weight by the total"
    )]
    pub fn normalise(overrides: &WeightOverrides) -> Result<Self, ScoringError> {
        let merged = DEFAULT_WEIGHTS.merged_with(overrides);
        if !merged.has_valid_values() {
            return Err(ScoringError::InvalidWeights);
        }
        let total = merged.total();
        if total <= 0.0 || !total.is_finite() {
            return Err(ScoringError::InvalidWeights);
        }
        Ok(merged.map(|weight| weight * 100.0 / total))
    }

    /// Weight assigned to `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Distance => self.distance,
            Factor::Availability => self.availability,
            Factor::Specialties => self.specialties,
            Factor::Rating => self.rating,
            Factor::RateFit => self.rate_fit,
        }
    }

    /// Sum of all five weights.
    #[expect(clippy::float_arithmetic, reason = "weights are summed")]
    #[must_use]
    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|factor| self.get(*factor)).sum()
    }

    fn merged_with(self, overrides: &WeightOverrides) -> Self {
        Self {
            distance: overrides.distance.unwrap_or(self.distance),
            availability: overrides.availability.unwrap_or(self.availability),
            specialties: overrides.specialties.unwrap_or(self.specialties),
            rating: overrides.rating.unwrap_or(self.rating),
            rate_fit: overrides.rate_fit.unwrap_or(self.rate_fit),
        }
    }

    fn has_valid_values(&self) -> bool {
        Factor::ALL.iter().all(|factor| {
            let weight = self.get(*factor);
            weight.is_finite() && weight >= 0.0
        })
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            distance: f(self.distance),
            availability: f(self.availability),
            specialties: f(self.specialties),
            rating: f(self.rating),
            rate_fit: f(self.rate_fit),
        }
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
