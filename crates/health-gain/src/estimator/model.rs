use super::profile::{HabitProfile, Sex};
use serde::{Deserialize, Serialize};

const BINGE_THRESHOLD: i32 = 5;
const RR_FLOOR: f64 = 0.8;
const MAX_GAIN_YEARS: f64 = 3.0;
const FEMALE_ADJUSTMENT: f64 = 0.95;

/// Placeholder weights for the demo relative-risk index. Not calibrated against any literature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Per weekly drink.
    pub a: f64,
    /// Binge flag weight.
    pub b: f64,
    /// Per 20 years of drinking.
    pub c: f64,
    /// Scales the relative RR drop into years.
    pub k: f64,
}

impl Coefficients {
    pub const PLACEHOLDER: Self = Self {
        a: 0.02,
        b: 0.15,
        c: 0.10,
        k: 8.0,
    };

    fn relative_risk(&self, drinks_per_week: i64, binge: u8, years_drinking: i32) -> f64 {
        let rr = 1.0
            + self.a * drinks_per_week as f64
            + self.b * f64::from(binge)
            + self.c * (f64::from(years_drinking) / 20.0);
        rr.max(RR_FLOOR)
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Explainable breakdown of one estimate. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainDetail {
    pub age: i32,
    pub sex: String,
    pub now_drinks_per_week: i64,
    pub after_drinks_per_week: i64,
    pub rr_now: f64,
    pub rr_after: f64,
    pub gain_years: f64,
    pub gain_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainResult {
    pub headline: String,
    pub detail: GainDetail,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GainEstimator {
    coefficients: Coefficients,
}

impl GainEstimator {
    pub const fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Total over every integer input; out-of-range values give numbers, just not meaningful ones.
    pub fn estimate(
        &self,
        age: i32,
        sex: &str,
        drinking_days: i32,
        drinks_per_occ: i32,
        years_drinking: i32,
        target_days: i32,
    ) -> GainResult {
        let now_drinks_per_week = i64::from(drinking_days) * i64::from(drinks_per_occ);
        let after_drinks_per_week = i64::from(target_days) * i64::from(drinks_per_occ);

        let binge_now = u8::from(drinks_per_occ >= BINGE_THRESHOLD);
        // Only the number of days changes in the goal scenario, so the binge flag carries over.
        let binge_after = binge_now;

        let adjust = sex_adjustment(sex) * age_adjustment(age);

        let rr_now = self
            .coefficients
            .relative_risk(now_drinks_per_week, binge_now, years_drinking);
        let rr_after =
            self.coefficients
                .relative_risk(after_drinks_per_week, binge_after, years_drinking);

        let gain_years = (self.coefficients.k * (rr_now - rr_after) / rr_now * adjust)
            .clamp(0.0, MAX_GAIN_YEARS);
        let gain_months = months_from_years(gain_years);

        let headline = format!(
            "If you reduce your drinking days from {drinking_days} to {target_days} per week, \
             you could gain about +{gain_months} months of healthy life."
        );

        GainResult {
            headline,
            detail: GainDetail {
                age,
                sex: sex.to_string(),
                now_drinks_per_week,
                after_drinks_per_week,
                rr_now: round_to(rr_now, 3),
                rr_after: round_to(rr_after, 3),
                gain_years: round_to(gain_years, 2),
                gain_months,
            },
        }
    }

    pub fn estimate_profile(&self, profile: &HabitProfile) -> GainResult {
        self.estimate(
            profile.age,
            &profile.sex,
            profile.drinking_days,
            profile.drinks_per_occ,
            profile.years_drinking,
            profile.target_days,
        )
    }
}

/// Runs the estimator with the placeholder coefficients.
pub fn estimate(
    age: i32,
    sex: &str,
    drinking_days: i32,
    drinks_per_occ: i32,
    years_drinking: i32,
    target_days: i32,
) -> GainResult {
    GainEstimator::default().estimate(
        age,
        sex,
        drinking_days,
        drinks_per_occ,
        years_drinking,
        target_days,
    )
}

pub fn estimate_profile(profile: &HabitProfile) -> GainResult {
    GainEstimator::default().estimate_profile(profile)
}

fn sex_adjustment(sex: &str) -> f64 {
    match Sex::classify(sex) {
        Sex::Female => FEMALE_ADJUSTMENT,
        Sex::Male => 1.0,
    }
}

// ~1.2 at 20y down to the 0.6 floor at 80y.
fn age_adjustment(age: i32) -> f64 {
    (1.2 - (f64::from(age) - 20.0) * 0.01).max(0.6)
}

// gain_years is already clamped to [0, 3], so the cast stays within 0..=36.
fn months_from_years(gain_years: f64) -> u32 {
    (gain_years * 12.0).round_ties_even() as u32
}

// Goes through decimal formatting so the exact binary value is rounded, not `value * 10^n`.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
