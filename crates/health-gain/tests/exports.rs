use chrono::{TimeZone, Utc};
use health_gain::estimator::{estimate_profile, GainDetail, HabitProfile};
use health_gain::report::{detail_csv, summary_text};

#[test]
fn csv_has_header_and_exactly_one_row() {
    let detail = estimate_profile(&HabitProfile::default()).detail;
    let csv = detail_csv(&detail).expect("csv encodes");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "age,sex,now_drinks_per_week,after_drinks_per_week,rr_now,rr_after,gain_years,gain_months"
    );
    assert_eq!(lines[1], "28,Male,8,4,1.185,1.105,0.6,7");
}

#[test]
fn csv_row_reads_back_into_detail() {
    let profile = HabitProfile {
        sex: "Female".to_string(),
        drinks_per_occ: 6,
        ..HabitProfile::default()
    };
    let detail = estimate_profile(&profile).detail;
    let csv = detail_csv(&detail).expect("csv encodes");

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<GainDetail> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows, vec![detail]);
}

#[test]
fn summary_uses_utc_timestamp_and_headline() {
    let profile = HabitProfile {
        age: 41,
        drinking_days: 6,
        target_days: 3,
        ..HabitProfile::default()
    };
    let result = estimate_profile(&profile);
    let at = Utc
        .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
        .single()
        .expect("valid timestamp");

    let text = summary_text(&profile, &result, at);
    assert!(text.starts_with("AI Health Gain – Demo Result\nTime: 2024-12-31T23:59:59Z\n\n"));
    assert!(text.contains(&format!("\n{}\n", result.headline)));
    assert!(text.contains("- Age: 41\n- Sex: Male\n"));
    assert!(text.contains("- Drinks per occasion: 2\n- Years drinking: 5\n"));
    assert!(text.ends_with(&format!(
        "- Healthy life gain: {} months\n",
        result.detail.gain_months
    )));
}
