//! Caregiver hourly rate against a listing's acceptable band.
//!
//! Zero or non-finite amounts are treated as unspecified; negative amounts
//! are scored like any other. Deviation is measured
//! relative to the bound that was violated: the minimum when the caregiver
//! is cheaper, the maximum when they are dearer.

use carelink_core::FactorOutcome;

const NO_RATE_SCORE: f64 = 50.0;
const NO_BAND_SCORE: f64 = 75.0;
const SLIGHT_DEVIATION_PERCENT: f64 = 10.0;

/// Score a caregiver's hourly rate against the listing's rate band.
///
/// Falling slightly above a two-sided band (60) is penalised harder than
/// exceeding a maximum-only band (70).
///
/// # Examples
/// ```
/// use carelink_scorer::score_rate_fit;
///
/// assert_eq!(score_rate_fit(Some(25.0), Some(20.0), Some(30.0)).score, 100.0);
/// assert_eq!(score_rate_fit(Some(27.5), Some(20.0), Some(25.0)).score, 60.0);
/// assert_eq!(score_rate_fit(None, Some(20.0), None).score, 50.0);
/// ```
#[must_use]
pub fn score_rate_fit(
    caregiver_rate: Option<f64>,
    listing_min: Option<f64>,
    listing_max: Option<f64>,
) -> FactorOutcome {
    let Some(rate) = specified(caregiver_rate) else {
        return FactorOutcome::new(NO_RATE_SCORE, "Caregiver has not specified an hourly rate");
    };
    match (specified(listing_min), specified(listing_max)) {
        (None, None) => {
            FactorOutcome::new(NO_BAND_SCORE, "Listing has no specific rate requirements")
        }
        (Some(min), None) => min_only(rate, min),
        (None, Some(max)) => max_only(rate, max),
        (Some(min), Some(max)) => bounded(rate, min, max),
    }
}

fn specified(value: Option<f64>) -> Option<f64> {
    value.filter(|amount| amount.is_finite() && amount.abs() > 0.0)
}

#[expect(
    clippy::float_arithmetic,
    reason = "deviation is a percentage of the violated bound"
)]
fn percent_below(rate: f64, min: f64) -> f64 {
    (min - rate) * 100.0 / min
}

#[expect(
    clippy::float_arithmetic,
    reason = "deviation is a percentage of the violated bound"
)]
fn percent_above(rate: f64, max: f64) -> f64 {
    (rate - max) * 100.0 / max
}

fn min_only(rate: f64, min: f64) -> FactorOutcome {
    if rate >= min {
        return FactorOutcome::new(
            100.0,
            format!("Caregiver's rate (${rate}/hr) meets or exceeds the minimum rate (${min}/hr)"),
        );
    }
    if percent_below(rate, min) <= SLIGHT_DEVIATION_PERCENT {
        FactorOutcome::new(
            70.0,
            format!("Caregiver's rate (${rate}/hr) is slightly below the minimum rate (${min}/hr)"),
        )
    } else {
        FactorOutcome::new(
            30.0,
            format!(
                "Caregiver's rate (${rate}/hr) is significantly below the minimum rate (${min}/hr)"
            ),
        )
    }
}

fn max_only(rate: f64, max: f64) -> FactorOutcome {
    if rate <= max {
        return FactorOutcome::new(
            100.0,
            format!("Caregiver's rate (${rate}/hr) is within the maximum rate (${max}/hr)"),
        );
    }
    if percent_above(rate, max) <= SLIGHT_DEVIATION_PERCENT {
        FactorOutcome::new(
            70.0,
            format!("Caregiver's rate (${rate}/hr) is slightly above the maximum rate (${max}/hr)"),
        )
    } else {
        FactorOutcome::new(
            30.0,
            format!(
                "Caregiver's rate (${rate}/hr) is significantly above the maximum rate (${max}/hr)"
            ),
        )
    }
}

fn bounded(rate: f64, min: f64, max: f64) -> FactorOutcome {
    let band = format!("(${min}-${max}/hr)");
    if rate < min {
        return if percent_below(rate, min) <= SLIGHT_DEVIATION_PERCENT {
            FactorOutcome::new(
                70.0,
                format!("Caregiver's rate (${rate}/hr) is slightly below the listing's range {band}"),
            )
        } else {
            FactorOutcome::new(
                30.0,
                format!(
                    "Caregiver's rate (${rate}/hr) is significantly below the listing's range {band}"
                ),
            )
        };
    }
    if rate > max {
        return if percent_above(rate, max) <= SLIGHT_DEVIATION_PERCENT {
            FactorOutcome::new(
                60.0,
                format!("Caregiver's rate (${rate}/hr) is slightly above the listing's range {band}"),
            )
        } else {
            FactorOutcome::new(
                20.0,
                format!(
                    "Caregiver's rate (${rate}/hr) is significantly above the listing's range {band}"
                ),
            )
        };
    }
    FactorOutcome::new(
        100.0,
        format!("Caregiver's rate (${rate}/hr) is within the listing's range {band}"),
    )
}
