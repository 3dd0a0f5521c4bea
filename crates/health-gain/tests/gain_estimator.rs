use health_gain::estimator::{
    estimate, estimate_profile, GainEstimator, HabitProfile, AGE_RANGE, DAYS_RANGE,
    DRINKS_PER_OCCASION_RANGE,
};

fn within(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

#[test]
fn reference_profile_matches_worked_example() {
    let result = estimate(28, "Male", 4, 2, 5, 2);
    let detail = &result.detail;

    assert_eq!(detail.age, 28);
    assert_eq!(detail.sex, "Male");
    assert_eq!(detail.now_drinks_per_week, 8);
    assert_eq!(detail.after_drinks_per_week, 4);
    assert_eq!(detail.rr_now, 1.185);
    assert_eq!(detail.rr_after, 1.105);
    assert_eq!(detail.gain_years, 0.6);
    assert_eq!(detail.gain_months, 7);
    assert_eq!(
        result.headline,
        "If you reduce your drinking days from 4 to 2 per week, you could gain about +7 months of healthy life."
    );
}

#[test]
fn gain_stays_in_display_range_for_every_valid_input() {
    let estimator = GainEstimator::default();
    for age in AGE_RANGE.step_by(5) {
        for drinking_days in DAYS_RANGE {
            for drinks_per_occ in DRINKS_PER_OCCASION_RANGE {
                for target_days in DAYS_RANGE {
                    for years_drinking in [0, 20, 60] {
                        let detail = estimator
                            .estimate(
                                age,
                                "Female",
                                drinking_days,
                                drinks_per_occ,
                                years_drinking,
                                target_days,
                            )
                            .detail;
                        assert!((0.0..=3.0).contains(&detail.gain_years));
                        assert!(detail.gain_months <= 36);
                        assert!(detail.rr_now >= 0.8);
                        assert!(detail.rr_after >= 0.8);
                        // gain_years is reported to 2 decimals, months from the unrounded value.
                        let drift = (f64::from(detail.gain_months) - detail.gain_years * 12.0).abs();
                        assert!(drift <= 0.5 + 0.005 * 12.0 + 1e-9, "drift {drift}");
                    }
                }
            }
        }
    }
}

#[test]
fn unchanged_days_gain_nothing() {
    for days in DAYS_RANGE {
        let detail = estimate(45, "Male", days, 6, 12, days).detail;
        assert_eq!(detail.now_drinks_per_week, detail.after_drinks_per_week);
        assert_eq!(detail.rr_now, detail.rr_after);
        assert_eq!(detail.gain_years, 0.0);
        assert_eq!(detail.gain_months, 0);
    }
}

#[test]
fn raising_target_days_never_gains() {
    let detail = estimate(30, "Male", 2, 4, 5, 6).detail;
    assert_eq!(detail.gain_years, 0.0);
    assert_eq!(detail.gain_months, 0);
}

#[test]
fn fewer_target_days_never_lower_the_gain() {
    for drinks_per_occ in DRINKS_PER_OCCASION_RANGE {
        let mut previous = 0.0;
        for target_days in (0..=7).rev() {
            let gain = estimate(35, "Male", 7, drinks_per_occ, 10, target_days)
                .detail
                .gain_years;
            assert!(
                gain >= previous,
                "gain dropped from {previous} to {gain} at {target_days} days"
            );
            previous = gain;
        }
    }
}

#[test]
fn sex_only_scales_the_gain() {
    let male = estimate(50, "Male", 6, 3, 20, 1).detail;
    let female = estimate(50, "female", 6, 3, 20, 1).detail;

    assert_eq!(male.rr_now, female.rr_now);
    assert_eq!(male.rr_after, female.rr_after);
    assert!(female.gain_years < male.gain_years);
    assert!(within(female.gain_years, male.gain_years * 0.95, 0.01));
    assert_eq!(female.sex, "female");
}

#[test]
fn binge_flag_is_shared_between_scenarios() {
    // Five drinks per occasion sets the flag, and the goal scenario keeps it.
    let detail = estimate(28, "Male", 4, 5, 0, 2).detail;
    assert!(within(detail.rr_now, 1.0 + 0.02 * 20.0 + 0.15, 1e-9));
    assert!(within(detail.rr_after, 1.0 + 0.02 * 10.0 + 0.15, 1e-9));
}

#[test]
fn heavy_long_term_drinking_hits_the_cap() {
    let detail = estimate(20, "Male", 7, 10, 60, 0).detail;
    assert_eq!(detail.gain_years, 3.0);
    assert_eq!(detail.gain_months, 36);
}

#[test]
fn profile_wrapper_matches_positional_call() {
    let profile = HabitProfile {
        age: 62,
        sex: "F".to_string(),
        drinking_days: 5,
        drinks_per_occ: 4,
        years_drinking: 30,
        target_days: 1,
    };
    assert_eq!(estimate_profile(&profile), estimate(62, "F", 5, 4, 30, 1));
}
