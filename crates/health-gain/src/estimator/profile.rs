use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const FEMALE_SYNONYMS: [&str; 3] = ["female", "f", "woman"];

pub const AGE_RANGE: RangeInclusive<i32> = 15..=90;
pub const DAYS_RANGE: RangeInclusive<i32> = 0..=7;
pub const DRINKS_PER_OCCASION_RANGE: RangeInclusive<i32> = 0..=10;
pub const YEARS_DRINKING_RANGE: RangeInclusive<i32> = 0..=60;

/// Sex bucket used by the demo adjustment. Anything not recognised as female counts as male.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn classify(raw: &str) -> Self {
        let normalized = raw.to_lowercase();
        if FEMALE_SYNONYMS.contains(&normalized.as_str()) {
            Self::Female
        } else {
            Self::Male
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("sex must not be empty")]
    MissingSex,
    /// The submission could not be decoded into a profile at all.
    #[error("{0}")]
    Malformed(String),
}

/// One submission of the habit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitProfile {
    pub age: i32,
    pub sex: String,
    pub drinking_days: i32,
    #[serde(alias = "drinks_per_occasion")]
    pub drinks_per_occ: i32,
    pub years_drinking: i32,
    pub target_days: i32,
}

impl Default for HabitProfile {
    fn default() -> Self {
        Self {
            age: 28,
            sex: Sex::Male.label().to_string(),
            drinking_days: 4,
            drinks_per_occ: 2,
            years_drinking: 5,
            target_days: 2,
        }
    }
}

impl HabitProfile {
    /// Applies the bounds the form widgets enforce. The estimator itself never calls this.
    pub fn validate(&self) -> Result<(), InputError> {
        check("age", self.age, &AGE_RANGE)?;
        if self.sex.trim().is_empty() {
            return Err(InputError::MissingSex);
        }
        check("drinking_days", self.drinking_days, &DAYS_RANGE)?;
        check(
            "drinks_per_occ",
            self.drinks_per_occ,
            &DRINKS_PER_OCCASION_RANGE,
        )?;
        check("years_drinking", self.years_drinking, &YEARS_DRINKING_RANGE)?;
        check("target_days", self.target_days, &DAYS_RANGE)
    }

    pub fn sex_bucket(&self) -> Sex {
        Sex::classify(&self.sex)
    }

    pub fn is_reducing(&self) -> bool {
        self.target_days < self.drinking_days
    }
}

fn check(field: &'static str, value: i32, range: &RangeInclusive<i32>) -> Result<(), InputError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
