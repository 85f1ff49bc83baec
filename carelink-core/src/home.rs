//! Assisted-living homes and the family preferences matched against them.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Level of care an assisted-living home can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CareLevel {
    /// Independent living with minimal support.
    Independent,
    /// Assisted living with help for daily activities.
    Assisted,
    /// Secure care for memory conditions.
    MemoryCare,
    /// Round-the-clock skilled nursing.
    SkilledNursing,
}

impl CareLevel {
    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "INDEPENDENT",
            Self::Assisted => "ASSISTED",
            Self::MemoryCare => "MEMORY_CARE",
            Self::SkilledNursing => "SKILLED_NURSING",
        }
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a care level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown care level '{0}'")]
pub struct UnknownCareLevel(pub String);

impl FromStr for CareLevel {
    type Err = UnknownCareLevel;

    /// Parse a care level, accepting the long-form aliases used by intake
    /// forms.
    ///
    /// # Examples
    /// ```
    /// use carelink_core::CareLevel;
    ///
    /// assert_eq!("ASSISTED_LIVING".parse(), Ok(CareLevel::Assisted));
    /// assert!("HOSPICE".parse::<CareLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDEPENDENT_LIVING" | "INDEPENDENT" => Ok(Self::Independent),
            "ASSISTED_LIVING" | "ASSISTED" => Ok(Self::Assisted),
            "MEMORY_CARE" => Ok(Self::MemoryCare),
            "SKILLED_NURSING" => Ok(Self::SkilledNursing),
            other => Err(UnknownCareLevel(other.to_owned())),
        }
    }
}

/// An assisted-living home listed on the platform.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HomeListing {
    /// Stable identifier.
    pub id: String,
    /// Whether the home currently accepts residents.
    pub active: bool,
    /// Lowest monthly price.
    pub price_min: Option<f64>,
    /// Highest monthly price.
    pub price_max: Option<f64>,
    /// Free-form amenities such as "Memory Care" or "Pet Friendly".
    pub amenities: Vec<String>,
    /// Care levels offered.
    pub care_levels: Vec<CareLevel>,
    /// Postal code of the home's address.
    pub zip_code: Option<String>,
}

/// What a family is looking for in a home.
///
/// `care_level` is kept as the raw intake string so unrecognised values can
/// be scored neutrally instead of rejected.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FamilyPreferences {
    /// Lowest monthly budget.
    pub budget_min: f64,
    /// Highest monthly budget.
    pub budget_max: f64,
    /// Medical conditions such as `dementia` or `mobility_issues`.
    pub medical_conditions: Vec<String>,
    /// Requested care level name.
    pub care_level: String,
    /// Preferred caregiver gender.
    pub preferred_gender: Option<String>,
    /// Religious affiliation to accommodate.
    pub religion: Option<String>,
    /// Dietary requirements.
    pub dietary_needs: Vec<String>,
    /// Hobbies the resident enjoys.
    pub hobbies: Vec<String>,
    /// Pet situation, e.g. `HAS_PETS`, `PET_FRIENDLY` or `NO_PETS`.
    pub pet_preferences: Option<String>,
    /// Family postal code.
    pub zip_code: String,
    /// Search radius in miles.
    pub max_distance: f64,
    /// Free-form move-in timeline.
    pub move_in_timeline: String,
}

/// Per-factor scores for a home, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HomeFactorScores {
    /// Price range against budget.
    pub budget: f64,
    /// Amenities against medical conditions.
    pub condition: f64,
    /// Offered care levels against the requested one.
    pub care_level: f64,
    /// Postal code proximity.
    pub location: f64,
    /// Lifestyle preferences.
    pub amenities: f64,
}

/// Fit between a home and a family's preferences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HomeScore {
    /// Identifier of the scored home.
    pub home_id: String,
    /// Weighted fit in `0.0..=100.0`, rounded to two decimals.
    pub fit_score: f64,
    /// Per-factor breakdown, rounded to two decimals.
    pub factors: HomeFactorScores,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INDEPENDENT_LIVING", CareLevel::Independent)]
    #[case("INDEPENDENT", CareLevel::Independent)]
    #[case("ASSISTED_LIVING", CareLevel::Assisted)]
    #[case("ASSISTED", CareLevel::Assisted)]
    #[case("MEMORY_CARE", CareLevel::MemoryCare)]
    #[case("SKILLED_NURSING", CareLevel::SkilledNursing)]
    fn care_level_aliases(#[case] input: &str, #[case] expected: CareLevel) {
        assert_eq!(input.parse::<CareLevel>(), Ok(expected));
    }

    #[test]
    fn care_level_rejects_unknown() {
        let err = "memory_care".parse::<CareLevel>().expect_err("names are case sensitive");
        assert_eq!(err, UnknownCareLevel("memory_care".into()));
    }
}
