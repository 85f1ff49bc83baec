//! The five home fit factors. Each returns a score in `0.0..=100.0`.

use carelink_core::CareLevel;

const NEUTRAL: f64 = 50.0;
const AMENITY_SHARE: f64 = 25.0;

/// Amenities a home is expected to offer for each known condition.
const CONDITION_AMENITIES: [(&str, &[&str]); 8] = [
    (
        "dementia",
        &["Memory Care", "Dementia Care", "Alzheimer's Care", "Secure Unit"],
    ),
    (
        "alzheimers",
        &["Memory Care", "Alzheimer's Care", "Dementia Care", "Secure Unit"],
    ),
    (
        "diabetes",
        &["Medication Management", "Diabetic Meal Plans", "Medical Monitoring"],
    ),
    (
        "mobility_issues",
        &["Wheelchair Accessible", "Physical Therapy", "Grab Bars", "Ramps"],
    ),
    (
        "incontinence",
        &["Personal Care", "Assisted Bathing", "24/7 Care"],
    ),
    (
        "heart_disease",
        &["Medical Monitoring", "24/7 Nursing", "Emergency Response"],
    ),
    (
        "stroke",
        &["Physical Therapy", "Occupational Therapy", "Speech Therapy"],
    ),
    (
        "parkinsons",
        &["Physical Therapy", "Fall Prevention", "Medication Management"],
    ),
];

fn priced(value: Option<f64>) -> Option<f64> {
    value.filter(|price| price.is_finite() && *price > 0.0)
}

/// Score a home's monthly price range against the family budget.
#[expect(
    clippy::float_arithmetic,
    reason = "budget fit is measured as relative overlap and excess"
)]
pub(crate) fn budget(
    price_min: Option<f64>,
    price_max: Option<f64>,
    budget_min: f64,
    budget_max: f64,
) -> f64 {
    let (Some(home_min), Some(home_max)) = (priced(price_min), priced(price_max)) else {
        return NEUTRAL;
    };

    if home_min <= budget_max && home_max >= budget_min {
        let budget_range = budget_max - budget_min;
        if budget_range <= 0.0 {
            return 100.0;
        }
        let overlap = home_max.min(budget_max) - home_min.max(budget_min);
        return 70.0 + overlap / budget_range * 30.0;
    }

    if home_min > budget_max {
        let excess = (home_min - budget_max) / budget_max;
        return stepped(excess, [60.0, 40.0, 20.0, 0.0]);
    }

    if home_max < budget_min {
        let deficit = (budget_min - home_max) / budget_min;
        return stepped(deficit, [65.0, 50.0, 30.0, 10.0]);
    }

    NEUTRAL
}

/// Pick the score for a relative deviation below 10%, 20%, 30%, or beyond.
fn stepped(deviation: f64, [near, close, far, beyond]: [f64; 4]) -> f64 {
    if deviation < 0.1 {
        near
    } else if deviation < 0.2 {
        close
    } else if deviation < 0.3 {
        far
    } else {
        beyond
    }
}

fn mentions(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn either_mentions(left: &str, right: &str) -> bool {
    mentions(left, right) || mentions(right, left)
}

/// Score how well the home's amenities cover the resident's conditions.
///
/// Unrecognised conditions add nothing to either side of the ratio.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "coverage is a ratio of small counts"
)]
pub(crate) fn condition<S: AsRef<str>>(amenities: &[S], conditions: &[S]) -> f64 {
    if conditions.is_empty() {
        return 100.0;
    }
    let expected: Vec<&str> = conditions
        .iter()
        .filter_map(|name| {
            let key = name.as_ref().to_lowercase();
            CONDITION_AMENITIES
                .iter()
                .find(|(condition, _)| *condition == key)
                .map(|(_, features)| *features)
        })
        .flatten()
        .copied()
        .collect();
    if expected.is_empty() {
        return 100.0;
    }
    let matched = expected
        .iter()
        .filter(|feature| {
            amenities
                .iter()
                .any(|amenity| either_mentions(amenity.as_ref(), feature))
        })
        .count();
    (matched as f64 / expected.len() as f64 * 100.0 + 20.0).min(100.0)
}

/// Score the care levels a home offers against the requested level name.
pub(crate) fn care_level(offered: &[CareLevel], requested: &str) -> f64 {
    let Ok(wanted) = requested.parse::<CareLevel>() else {
        return NEUTRAL;
    };
    if offered.contains(&wanted) {
        100.0
    } else if wanted == CareLevel::Assisted && offered.contains(&CareLevel::MemoryCare) {
        80.0
    } else if offered.contains(&CareLevel::SkilledNursing) {
        70.0
    } else {
        0.0
    }
}

/// Approximate proximity from postal codes alone.
pub(crate) fn location(home_zip: Option<&str>, family_zip: &str) -> f64 {
    let Some(home) = home_zip.filter(|zip| !zip.is_empty()) else {
        return NEUTRAL;
    };
    if home == family_zip {
        return 100.0;
    }
    let home_prefix = area_prefix(home);
    let family_prefix = area_prefix(family_zip);
    if home_prefix == family_prefix {
        return 80.0;
    }
    let (Some(home_area), Some(family_area)) =
        (leading_number(home_prefix), leading_number(family_prefix))
    else {
        return 10.0;
    };
    match home_area.abs_diff(family_area) {
        0..=5 => 60.0,
        6..=10 => 40.0,
        11..=20 => 20.0,
        _ => 10.0,
    }
}

/// First three characters of a zip code.
fn area_prefix(zip: &str) -> &str {
    zip.char_indices()
        .nth(3)
        .and_then(|(end, _)| zip.get(..end))
        .unwrap_or(zip)
}

/// Digits at the start of `prefix`, so "94a" reads as 94.
fn leading_number(prefix: &str) -> Option<u32> {
    let end = prefix
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(prefix.len());
    prefix.get(..end)?.parse().ok()
}

/// Lifestyle preferences the amenity factor looks at.
pub(crate) struct Lifestyle<'a> {
    pub religion: Option<&'a str>,
    pub dietary_needs: &'a [String],
    pub hobbies: &'a [String],
    pub pet_preferences: Option<&'a str>,
}

/// Score lifestyle preferences against the home's amenities.
///
/// Religion, diet, pets and hobbies are each worth a quarter when the family
/// specified them.
#[expect(
    clippy::float_arithmetic,
    reason = "each preference contributes a share of the score"
)]
pub(crate) fn amenities<S: AsRef<str>>(offered: &[S], lifestyle: &Lifestyle<'_>) -> f64 {
    let offers = |terms: &[&str]| {
        offered
            .iter()
            .any(|amenity| terms.iter().any(|term| mentions(amenity.as_ref(), term)))
    };
    let mut score = 0.0;
    let mut considered = 0_u32;

    if let Some(religion) = lifestyle.religion.filter(|value| !value.is_empty()) {
        considered += 1;
        if offers(&[religion, "chaplain", "religious"]) {
            score += AMENITY_SHARE;
        }
    }
    if !lifestyle.dietary_needs.is_empty() {
        considered += 1;
        score += share_met(lifestyle.dietary_needs, |diet| {
            offers(&[diet, "dietary", "meal"])
        });
    }
    if let Some(pets) = lifestyle.pet_preferences.filter(|value| !value.is_empty()) {
        considered += 1;
        let needs_pets = pets == "HAS_PETS" || pets == "PET_FRIENDLY";
        if !needs_pets || offers(&["pet", "animal"]) {
            score += AMENITY_SHARE;
        }
    }
    if !lifestyle.hobbies.is_empty() {
        considered += 1;
        score += share_met(lifestyle.hobbies, |hobby| {
            offers(&[hobby, "activity", "recreation"])
        });
    }

    if considered == 0 {
        return 100.0;
    }
    (score / f64::from(considered) * (100.0 / AMENITY_SHARE)).min(100.0)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the share is proportional to the items met"
)]
fn share_met(items: &[String], met: impl Fn(&str) -> bool) -> f64 {
    let hits = items.iter().filter(|item| met(item.as_str())).count();
    hits as f64 / items.len() as f64 * AMENITY_SHARE
}
