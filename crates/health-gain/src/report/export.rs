use crate::estimator::{GainDetail, GainResult, HabitProfile};
use chrono::{DateTime, Timelike, Utc};

pub const SUMMARY_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode result row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Plain-text summary offered as the `.txt` download.
pub fn summary_text(
    profile: &HabitProfile,
    result: &GainResult,
    generated_at: DateTime<Utc>,
) -> String {
    let detail = &result.detail;
    // Whole seconds carry no fractional part.
    let time_format = if generated_at.nanosecond() / 1_000 == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    format!(
        "AI Health Gain – Demo Result\n\
         Time: {time}Z\n\
         \n\
         {headline}\n\
         \n\
         Inputs:\n\
         - Age: {age}\n\
         - Sex: {sex}\n\
         - Drinking days (now→goal): {now} → {goal}\n\
         - Drinks per occasion: {per_occ}\n\
         - Years drinking: {years}\n\
         \n\
         Model (demo):\n\
         - RR now / after: {rr_now:?} / {rr_after:?}\n\
         - Healthy life gain: {months} months\n",
        time = generated_at.format(time_format),
        headline = result.headline,
        age = detail.age,
        sex = detail.sex,
        now = profile.drinking_days,
        goal = profile.target_days,
        per_occ = profile.drinks_per_occ,
        years = profile.years_drinking,
        rr_now = detail.rr_now,
        rr_after = detail.rr_after,
        months = detail.gain_months,
    )
}

/// Header plus a single data row, columns in `GainDetail` field order.
pub fn detail_csv(detail: &GainDetail) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(detail)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_profile;
    use chrono::TimeZone;

    #[test]
    fn summary_lists_inputs_and_model_figures() {
        let profile = HabitProfile::default();
        let result = estimate_profile(&profile);
        let at = Utc
            .with_ymd_and_hms(2025, 3, 1, 8, 30, 0)
            .single()
            .expect("valid timestamp");

        let text = summary_text(&profile, &result, at);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AI Health Gain – Demo Result");
        assert_eq!(lines[1], "Time: 2025-03-01T08:30:00Z");
        assert_eq!(lines[3], result.headline);
        assert!(lines.contains(&"- Drinking days (now→goal): 4 → 2"));
        assert!(lines.contains(&"- RR now / after: 1.185 / 1.105"));
        assert!(lines.contains(&"- Healthy life gain: 7 months"));
    }

    #[test]
    fn sub_second_timestamps_print_microseconds() {
        let profile = HabitProfile::default();
        let result = estimate_profile(&profile);
        let at = Utc
            .with_ymd_and_hms(2025, 3, 1, 8, 30, 0)
            .single()
            .and_then(|at| at.with_nanosecond(123_456_789))
            .expect("valid timestamp");

        let text = summary_text(&profile, &result, at);
        assert_eq!(text.lines().nth(1), Some("Time: 2025-03-01T08:30:00.123456Z"));

        let at = at.with_nanosecond(999).expect("valid nanosecond");
        let text = summary_text(&profile, &result, at);
        assert_eq!(text.lines().nth(1), Some("Time: 2025-03-01T08:30:00Z"));
    }

    #[test]
    fn whole_number_risks_keep_a_decimal_point() {
        let profile = HabitProfile {
            drinks_per_occ: 0,
            years_drinking: 0,
            ..HabitProfile::default()
        };
        let result = estimate_profile(&profile);
        let text = summary_text(&profile, &result, Utc::now());
        assert!(text.contains("- RR now / after: 1.0 / 1.0"));
    }
}
