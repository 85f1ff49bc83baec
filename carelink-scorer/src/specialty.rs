//! Overlap between caregiver specialties and listing requirements.

use carelink_core::FactorOutcome;

const NO_SPECIALTIES_SCORE: f64 = 25.0;
const NO_REQUIREMENTS_SCORE: f64 = 75.0;

/// Score caregiver specialties against a listing's requirement list.
///
/// Matching is case-insensitive substring containment in either direction,
/// so "dementia" matches "Dementia Care". The match percentage counts
/// caregiver specialties that match at least one requirement and divides by
/// the number of requirements, so it can exceed 100. Entries are only
/// lowercased: a blank entry still counts and is contained in every string.
///
/// # Examples
/// ```
/// use carelink_scorer::score_specialties;
///
/// let outcome = score_specialties(&["Dementia Care"], ["dementia"]);
/// assert_eq!(outcome.score, 100.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the match percentage is a ratio of small counts"
)]
#[must_use]
pub fn score_specialties<'a, S, R>(caregiver_specialties: &[S], requirements: R) -> FactorOutcome
where
    S: AsRef<str>,
    R: IntoIterator<Item = &'a str>,
{
    let specialties = normalised(caregiver_specialties.iter().map(AsRef::as_ref));
    if specialties.is_empty() {
        return FactorOutcome::new(
            NO_SPECIALTIES_SCORE,
            "Caregiver has not specified any specialties",
        );
    }

    let wanted = normalised(requirements);
    if wanted.is_empty() {
        return FactorOutcome::new(
            NO_REQUIREMENTS_SCORE,
            "Listing has no specific specialty requirements",
        );
    }

    let matching = specialties
        .iter()
        .filter(|specialty| {
            wanted.iter().any(|requirement| {
                requirement.contains(specialty.as_str()) || specialty.contains(requirement.as_str())
            })
        })
        .count();
    let percentage = matching as f64 * 100.0 / wanted.len() as f64;
    banded(percentage)
}

fn normalised<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

fn banded(percentage: f64) -> FactorOutcome {
    let shown = percentage.round();
    if percentage >= 100.0 {
        FactorOutcome::new(100.0, "Caregiver's specialties match all listing requirements")
    } else if percentage >= 75.0 {
        FactorOutcome::new(
            85.0,
            format!("Caregiver's specialties match {shown}% of listing requirements"),
        )
    } else if percentage >= 50.0 {
        FactorOutcome::new(
            70.0,
            format!("Caregiver's specialties match {shown}% of listing requirements"),
        )
    } else if percentage > 0.0 {
        FactorOutcome::new(
            40.0,
            format!("Caregiver's specialties only match {shown}% of listing requirements"),
        )
    } else {
        FactorOutcome::new(10.0, "None of caregiver's specialties match listing requirements")
    }
}
