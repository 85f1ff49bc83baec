//! Rephrase reasons so they address the caregiver directly.

/// Third-person prefixes and their second-person replacements, applied in
/// order.
const REPLACEMENTS: [(&str, &str); 4] = [
    ("Caregiver is", "You are"),
    ("Caregiver has", "You have"),
    ("Caregiver's rate", "Your rate"),
    ("caregiver's specialties", "your specialties"),
];

/// Rewrite a reason from the caregiver's point of view.
///
/// Each phrase is replaced at most once, at its first occurrence. Reasons
/// that mention none of the phrases are returned unchanged.
///
/// # Examples
/// ```
/// use carelink_scorer::second_person;
///
/// assert_eq!(
///     second_person("Caregiver is fully available during the requested time"),
///     "You are fully available during the requested time",
/// );
/// assert_eq!(
///     second_person("None of caregiver's specialties match listing requirements"),
///     "None of your specialties match listing requirements",
/// );
/// ```
#[must_use]
pub fn second_person(reason: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(reason.to_owned(), |text, (from, to)| text.replacen(from, to, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "Caregiver has an average rating of 4.7 stars from 3 reviews",
        "You have an average rating of 4.7 stars from 3 reviews"
    )]
    #[case(
        "Caregiver's rate ($25/hr) is within the listing's range ($20-$30/hr)",
        "Your rate ($25/hr) is within the listing's range ($20-$30/hr)"
    )]
    #[case(
        "Caregiver's specialties match all listing requirements",
        "Caregiver's specialties match all listing requirements"
    )]
    #[case(
        "3 miles from listing location (within 25 mile radius)",
        "3 miles from listing location (within 25 mile radius)"
    )]
    fn rewrites_known_prefixes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(second_person(input), expected);
    }

    #[rstest]
    fn only_first_occurrence_is_replaced() {
        assert_eq!(
            second_person("Caregiver is here; Caregiver is there"),
            "You are here; Caregiver is there"
        );
    }
}
