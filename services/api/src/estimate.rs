use crate::infra::write_export;
use chrono::Utc;
use clap::Args;
use health_gain::error::AppError;
use health_gain::estimator::{GainEstimator, HabitProfile};
use health_gain::report::{
    detail_csv, summary_text, GainReport, DISCLAIMER, PAGE_TITLE, PROGRESS_CAP_MONTHS,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Age in years (15-90)
    #[arg(long, default_value_t = 28)]
    pub(crate) age: i32,
    /// Male or Female
    #[arg(long, default_value = "Male")]
    pub(crate) sex: String,
    /// Current drinking days per week (0-7)
    #[arg(long, default_value_t = 4)]
    pub(crate) drinking_days: i32,
    /// Approximate drinks per occasion (0-10)
    #[arg(long = "drinks-per-occasion", default_value_t = 2)]
    pub(crate) drinks_per_occ: i32,
    /// Years of drinking (0-60)
    #[arg(long, default_value_t = 5)]
    pub(crate) years_drinking: i32,
    /// Goal drinking days per week (0-7)
    #[arg(long, default_value_t = 2)]
    pub(crate) target_days: i32,
    /// Write the plain-text summary to this path
    #[arg(long)]
    pub(crate) summary_out: Option<PathBuf>,
    /// Write the single-row CSV to this path
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl EstimateArgs {
    fn profile(&self) -> HabitProfile {
        HabitProfile {
            age: self.age,
            sex: self.sex.clone(),
            drinking_days: self.drinking_days,
            drinks_per_occ: self.drinks_per_occ,
            years_drinking: self.years_drinking,
            target_days: self.target_days,
        }
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let profile = args.profile();
    profile.validate()?;

    let report = GainReport::build(&GainEstimator::default(), &profile);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        render_report(&report);
    }

    if let Some(path) = args.summary_out {
        let text = summary_text(&profile, &report.result(), Utc::now());
        write_export(&path, &text)?;
        println!("Saved summary to {}", path.display());
    }

    if let Some(path) = args.csv_out {
        let csv = detail_csv(&report.detail)?;
        write_export(&path, &csv)?;
        println!("Saved data to {}", path.display());
    }

    Ok(())
}

pub(crate) fn render_report(report: &GainReport) {
    println!("{PAGE_TITLE}");
    println!("\nYour estimated gain");
    println!("{}", report.headline);

    println!("\nHealth lifespan bar");
    println!(
        "{} {:.0}%",
        lifespan_bar(report.detail.gain_months),
        report.progress * 100.0
    );

    println!("\nGentle tips");
    for tip in &report.tips {
        println!("- {tip}");
    }

    let detail = &report.detail;
    println!("\nModel details (demo, explainable)");
    println!("- Age: {} | Sex: {}", detail.age, detail.sex);
    println!(
        "- Drinks per week: {} now -> {} after",
        detail.now_drinks_per_week, detail.after_drinks_per_week
    );
    println!("- RR now / after: {:?} / {:?}", detail.rr_now, detail.rr_after);
    println!(
        "- Gain: {:?} years ({} months)",
        detail.gain_years, detail.gain_months
    );

    println!("\n{DISCLAIMER}");
}

/// One cell per month up to the bar's cap.
fn lifespan_bar(gain_months: u32) -> String {
    let filled = gain_months.min(PROGRESS_CAP_MONTHS) as usize;
    let empty = PROGRESS_CAP_MONTHS as usize - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}
