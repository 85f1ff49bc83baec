//! Fit between assisted-living homes and a family's preferences.
//!
//! Five factors are blended with fixed weights: budget 30%, medical
//! conditions 25%, care level 20%, location 15% and lifestyle amenities 10%.
//! Location is approximated from postal codes; nothing is geocoded.

mod factors;

use std::cmp::Ordering;

use carelink_core::{CareLevel, FamilyPreferences, HomeFactorScores, HomeListing, HomeScore};
use log::debug;

use factors::Lifestyle;

const BUDGET_WEIGHT: f64 = 0.30;
const CONDITION_WEIGHT: f64 = 0.25;
const CARE_LEVEL_WEIGHT: f64 = 0.20;
const LOCATION_WEIGHT: f64 = 0.15;
const AMENITIES_WEIGHT: f64 = 0.10;

/// Default number of homes returned by [`find_matching_homes`].
pub const DEFAULT_HOME_LIMIT: usize = 5;

/// Score one home against the family's preferences.
///
/// The fit and every factor are rounded to two decimal places.
///
/// # Examples
/// ```
/// use carelink_core::{CareLevel, FamilyPreferences, HomeListing};
/// use carelink_scorer::score_home;
///
/// let home = HomeListing {
///     id: "oak".into(),
///     active: true,
///     price_min: Some(3000.0),
///     price_max: Some(5000.0),
///     care_levels: vec![CareLevel::Assisted],
///     zip_code: Some("94110".into()),
///     ..HomeListing::default()
/// };
/// let family = FamilyPreferences {
///     budget_min: 3000.0,
///     budget_max: 5000.0,
///     care_level: "ASSISTED_LIVING".into(),
///     zip_code: "94110".into(),
///     ..FamilyPreferences::default()
/// };
/// assert_eq!(score_home(&family, &home).fit_score, 100.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the fit is a weighted sum of factor scores"
)]
#[must_use]
pub fn score_home(preferences: &FamilyPreferences, home: &HomeListing) -> HomeScore {
    let lifestyle = Lifestyle {
        religion: preferences.religion.as_deref(),
        dietary_needs: &preferences.dietary_needs,
        hobbies: &preferences.hobbies,
        pet_preferences: preferences.pet_preferences.as_deref(),
    };
    let raw = HomeFactorScores {
        budget: factors::budget(
            home.price_min,
            home.price_max,
            preferences.budget_min,
            preferences.budget_max,
        ),
        condition: factors::condition(&home.amenities, &preferences.medical_conditions),
        care_level: factors::care_level(&home.care_levels, &preferences.care_level),
        location: factors::location(home.zip_code.as_deref(), &preferences.zip_code),
        amenities: factors::amenities(&home.amenities, &lifestyle),
    };
    let fit = raw.budget * BUDGET_WEIGHT
        + raw.condition * CONDITION_WEIGHT
        + raw.care_level * CARE_LEVEL_WEIGHT
        + raw.location * LOCATION_WEIGHT
        + raw.amenities * AMENITIES_WEIGHT;
    HomeScore {
        home_id: home.id.clone(),
        fit_score: two_decimals(fit),
        factors: HomeFactorScores {
            budget: two_decimals(raw.budget),
            condition: two_decimals(raw.condition),
            care_level: two_decimals(raw.care_level),
            location: two_decimals(raw.location),
            amenities: two_decimals(raw.amenities),
        },
    }
}

/// Rank the homes that could take the resident, best fit first.
///
/// Only active homes offering the requested care level are considered; an
/// unrecognised care level therefore matches nothing. Ties keep input order.
#[must_use]
pub fn find_matching_homes(
    preferences: &FamilyPreferences,
    homes: &[HomeListing],
    limit: usize,
) -> Vec<HomeScore> {
    let Ok(requested) = preferences.care_level.parse::<CareLevel>() else {
        debug!(
            "care level '{}' is not recognised; no homes match",
            preferences.care_level
        );
        return Vec::new();
    };
    let mut scored: Vec<HomeScore> = homes
        .iter()
        .filter(|home| home.active && home.care_levels.contains(&requested))
        .map(|home| score_home(preferences, home))
        .collect();
    scored.sort_by(|left, right| {
        right
            .fit_score
            .partial_cmp(&left.fit_score)
            .unwrap_or(Ordering::Equal)
    });
    debug!("{} of {} homes match", scored.len(), homes.len());
    scored.truncate(limit);
    scored
}

#[expect(clippy::float_arithmetic, reason = "rounding to cents")]
fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn family() -> FamilyPreferences {
        FamilyPreferences {
            budget_min: 3000.0,
            budget_max: 5000.0,
            medical_conditions: vec!["dementia".into()],
            care_level: "MEMORY_CARE".into(),
            zip_code: "94110".into(),
            max_distance: 25.0,
            ..FamilyPreferences::default()
        }
    }

    fn home(id: &str, zip: &str, levels: &[CareLevel]) -> HomeListing {
        HomeListing {
            id: id.into(),
            active: true,
            price_min: Some(3500.0),
            price_max: Some(4500.0),
            amenities: vec!["Memory Care".into(), "Secure Unit".into()],
            care_levels: levels.to_vec(),
            zip_code: Some(zip.into()),
        }
    }

    #[rstest]
    fn factors_are_weighted(family: FamilyPreferences) {
        // budget 85, condition 70, care level 100, location 100, amenities 100
        let score = score_home(&family, &home("h", "94110", &[CareLevel::MemoryCare]));
        assert_eq!(score.factors.budget, 85.0);
        assert_eq!(score.factors.condition, 70.0);
        assert_eq!(score.fit_score, 88.0);
    }

    #[rstest]
    fn only_active_homes_with_the_care_level_are_ranked(family: FamilyPreferences) {
        let mut closed = home("closed", "94110", &[CareLevel::MemoryCare]);
        closed.active = false;
        let homes = [
            home("far", "10001", &[CareLevel::MemoryCare]),
            closed,
            home("assisted-only", "94110", &[CareLevel::Assisted]),
            home("near", "94110", &[CareLevel::MemoryCare]),
        ];
        let ranked = find_matching_homes(&family, &homes, DEFAULT_HOME_LIMIT);
        let ids: Vec<&str> = ranked.iter().map(|h| h.home_id.as_str()).collect();
        assert_eq!(ids, ["near", "far"]);
    }

    #[rstest]
    fn limit_truncates(family: FamilyPreferences) {
        let homes = [
            home("a", "94110", &[CareLevel::MemoryCare]),
            home("b", "94111", &[CareLevel::MemoryCare]),
        ];
        assert_eq!(find_matching_homes(&family, &homes, 1).len(), 1);
    }

    #[rstest]
    fn unknown_care_level_matches_nothing(mut family: FamilyPreferences) {
        family.care_level = "RESPITE".into();
        let homes = [home("a", "94110", &[CareLevel::MemoryCare])];
        assert!(find_matching_homes(&family, &homes, DEFAULT_HOME_LIMIT).is_empty());
    }

    #[rstest]
    #[case(12.344_9, 12.34)]
    #[case(12.345_1, 12.35)]
    #[case(70.0, 70.0)]
    fn rounds_to_two_decimals(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(two_decimals(raw), expected);
    }
}
