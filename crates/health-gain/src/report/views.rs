use crate::estimator::{GainDetail, GainEstimator, GainResult, HabitProfile};
use serde::Serialize;

/// Months at which the lifespan bar is full.
pub const PROGRESS_CAP_MONTHS: u32 = 36;

/// Fraction of the lifespan bar to fill, always within `[0.0, 1.0]`.
pub fn progress_fraction(gain_months: u32) -> f64 {
    f64::from(gain_months.min(PROGRESS_CAP_MONTHS)) / f64::from(PROGRESS_CAP_MONTHS)
}

pub fn gentle_tips(drinking_days: i32, target_days: i32) -> Vec<String> {
    let mut tips = Vec::new();
    if target_days < drinking_days {
        tips.push(format!(
            "Great start — moving from {drinking_days} to {target_days} days. Keep this pace 🌱"
        ));
        if i64::from(drinking_days) - i64::from(target_days) >= 2 {
            tips.push("If helpful, reduce by 1 day first and build your rhythm.".to_string());
        }
        tips.push(
            "Eating before drinking and ~3 workouts/week can further support heart health."
                .to_string(),
        );
    } else {
        tips.push(
            "Try reducing by 1 day per week first and build a sustainable rhythm.".to_string(),
        );
    }
    tips
}

/// Everything the result page and the JSON API show for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct GainReport {
    pub inputs: HabitProfile,
    pub headline: String,
    pub progress: f64,
    pub tips: Vec<String>,
    pub detail: GainDetail,
}

impl GainReport {
    pub fn build(estimator: &GainEstimator, profile: &HabitProfile) -> Self {
        let result = estimator.estimate_profile(profile);
        Self::from_result(profile.clone(), result)
    }

    pub fn from_result(inputs: HabitProfile, result: GainResult) -> Self {
        let GainResult { headline, detail } = result;
        Self {
            progress: progress_fraction(detail.gain_months),
            tips: gentle_tips(inputs.drinking_days, inputs.target_days),
            inputs,
            headline,
            detail,
        }
    }

    pub fn result(&self) -> GainResult {
        GainResult {
            headline: self.headline.clone(),
            detail: self.detail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_at_full_bar() {
        assert_eq!(progress_fraction(0), 0.0);
        assert_eq!(progress_fraction(18), 0.5);
        assert_eq!(progress_fraction(36), 1.0);
        assert_eq!(progress_fraction(48), 1.0);
    }

    #[test]
    fn big_reductions_suggest_stepping_down() {
        let tips = gentle_tips(5, 2);
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0], "Great start — moving from 5 to 2 days. Keep this pace 🌱");
        assert!(tips[1].contains("reduce by 1 day first"));
        assert!(tips[2].contains("workouts"));
    }

    #[test]
    fn single_day_reduction_skips_stepping_tip() {
        let tips = gentle_tips(4, 3);
        assert_eq!(tips.len(), 2);
        assert!(!tips.iter().any(|tip| tip.contains("reduce by 1 day first")));
    }

    #[test]
    fn no_reduction_gets_starter_tip() {
        for (now, goal) in [(3, 3), (2, 5)] {
            let tips = gentle_tips(now, goal);
            assert_eq!(tips.len(), 1);
            assert!(tips[0].starts_with("Try reducing by 1 day per week"));
        }
    }

    #[test]
    fn report_combines_estimate_and_presentation() {
        let report = GainReport::build(&GainEstimator::default(), &HabitProfile::default());
        assert_eq!(report.detail.gain_months, 7);
        assert!((report.progress - 7.0 / 36.0).abs() < 1e-12);
        assert_eq!(report.tips.len(), 3);
        assert_eq!(report.result().headline, report.headline);
    }
}
