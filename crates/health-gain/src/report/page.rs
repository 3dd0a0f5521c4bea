use super::views::GainReport;
use super::{DISCLAIMER, PAGE_TITLE, TAGLINE};
use crate::estimator::{
    HabitProfile, Sex, AGE_RANGE, DAYS_RANGE, DRINKS_PER_OCCASION_RANGE, YEARS_DRINKING_RANGE,
};
use std::ops::RangeInclusive;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#1f2a1f}\
form{display:grid;grid-template-columns:1fr 1fr;gap:.75rem 2rem}\
label{display:flex;flex-direction:column;font-size:.9rem}\
button{grid-column:1/-1;padding:.6rem;font-size:1rem}\
.success{background:#e6f4ea;border-left:4px solid #2e7d32;padding:.75rem}\
.error{background:#fdecea;border-left:4px solid #c62828;padding:.75rem}\
progress{width:100%;height:1.25rem}\
footer{margin-top:2rem;font-size:.8rem;color:#555}";

/// Hrefs for the two result downloads, already carrying the submission as a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLinks {
    pub summary: String,
    pub csv: String,
}

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(&esc(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// The landing page: just the form, optionally with a validation message above it.
pub fn render_form_page(profile: &HabitProfile, error: Option<&str>) -> String {
    let mut w = Html::new();
    open_document(&mut w);
    if let Some(message) = error {
        w.push("<p class=\"error\" role=\"alert\">");
        w.text(message);
        w.push("</p>");
    }
    input_form(&mut w, profile);
    close_document(&mut w);
    w.finish()
}

pub fn render_result_page(report: &GainReport, links: &DownloadLinks) -> String {
    let mut w = Html::new();
    open_document(&mut w);
    input_form(&mut w, &report.inputs);

    w.push("<section><h2>Your estimated gain</h2><p class=\"success\">");
    w.text(&report.headline);
    w.push("</p>");

    w.push("<h3>Health lifespan bar</h3>");
    w.push(format!(
        "<progress max=\"1\" value=\"{:.4}\">{:.0}%</progress>",
        report.progress,
        report.progress * 100.0
    ));

    w.push("<h3>Gentle tips</h3><ul>");
    for tip in &report.tips {
        w.push("<li>");
        w.text(tip);
        w.push("</li>");
    }
    w.push("</ul>");

    let detail_json = serde_json::to_string_pretty(&report.detail)
        .unwrap_or_else(|err| format!("detail unavailable: {err}"));
    w.push("<details><summary>See model details (demo, explainable)</summary><pre>");
    w.text(&detail_json);
    w.push("</pre></details></section>");

    w.push("<hr><section><h3>Save your result</h3><p>");
    w.push(format!(
        "<a href=\"{}\" download>Download summary (.txt)</a> · <a href=\"{}\" download>Download data (.csv)</a>",
        esc(&links.summary),
        esc(&links.csv)
    ));
    w.push("</p></section>");

    close_document(&mut w);
    w.finish()
}

fn open_document(w: &mut Html) {
    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>");
    w.text(PAGE_TITLE);
    w.push("</title><style>");
    w.push(STYLE);
    w.push("</style></head><body><header><h1>");
    w.text(PAGE_TITLE);
    w.push("</h1><p>");
    w.text(TAGLINE);
    w.push("</p></header><main>");
}

fn close_document(w: &mut Html) {
    w.push("</main><hr><footer>");
    w.text(DISCLAIMER);
    w.push("</footer></body></html>");
}

fn input_form(w: &mut Html, profile: &HabitProfile) {
    w.push("<form method=\"get\" action=\"/estimate\">");
    number_field(w, "age", "Age (years)", profile.age, &AGE_RANGE);
    sex_field(w, profile.sex_bucket());
    number_field(
        w,
        "years_drinking",
        "Years of drinking",
        profile.years_drinking,
        &YEARS_DRINKING_RANGE,
    );
    slider_field(
        w,
        "drinking_days",
        "Current drinking days per week",
        profile.drinking_days,
        &DAYS_RANGE,
    );
    slider_field(
        w,
        "drinks_per_occ",
        "Approx. drinks per occasion",
        profile.drinks_per_occ,
        &DRINKS_PER_OCCASION_RANGE,
    );
    slider_field(
        w,
        "target_days",
        "Goal: reduce drinking days to",
        profile.target_days,
        &DAYS_RANGE,
    );
    w.push("<button type=\"submit\">Calculate health gain</button></form>");
}

fn number_field(w: &mut Html, name: &str, label: &str, value: i32, range: &RangeInclusive<i32>) {
    w.push(format!(
        "<label>{label}<input type=\"number\" name=\"{name}\" min=\"{}\" max=\"{}\" step=\"1\" value=\"{value}\" required></label>",
        range.start(),
        range.end()
    ));
}

// The current value is echoed in an <output> next to the range input.
fn slider_field(w: &mut Html, name: &str, label: &str, value: i32, range: &RangeInclusive<i32>) {
    w.push(format!(
        "<label>{label} <output>{value}</output><input type=\"range\" name=\"{name}\" min=\"{}\" max=\"{}\" value=\"{value}\" oninput=\"this.previousElementSibling.value=this.value\"></label>",
        range.start(),
        range.end()
    ));
}

fn sex_field(w: &mut Html, selected: Sex) {
    w.push("<label>Gender<select name=\"sex\">");
    for option in [Sex::Male, Sex::Female] {
        let marker = if option == selected { " selected" } else { "" };
        w.push(format!(
            "<option value=\"{0}\"{marker}>{0}</option>",
            option.label()
        ));
    }
    w.push("</select></label>");
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::GainEstimator;

    fn links() -> DownloadLinks {
        DownloadLinks {
            summary: "/api/v1/estimate/summary.txt?age=28&sex=Male".to_string(),
            csv: "/api/v1/estimate/result.csv?age=28&sex=Male".to_string(),
        }
    }

    #[test]
    fn form_page_prefills_defaults() {
        let html = render_form_page(&HabitProfile::default(), None);
        assert!(html.contains("<title>AI Health Gain — Demo</title>"));
        assert!(html.contains("name=\"age\" min=\"15\" max=\"90\" step=\"1\" value=\"28\""));
        assert!(html.contains("<option value=\"Male\" selected>Male</option>"));
        assert!(html.contains("name=\"target_days\" min=\"0\" max=\"7\" value=\"2\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn form_page_escapes_error_text() {
        let html = render_form_page(&HabitProfile::default(), Some("age <b>bad</b>"));
        assert!(html.contains("age &lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn result_page_shows_headline_tips_and_downloads() {
        let report = GainReport::build(&GainEstimator::default(), &HabitProfile::default());
        let html = render_result_page(&report, &links());

        assert!(html.contains(&report.headline));
        assert!(html.contains("<progress max=\"1\" value=\"0.1944\">19%</progress>"));
        assert!(html.contains("Keep this pace 🌱"));
        assert!(html.contains("&quot;gain_months&quot;: 7"));
        assert!(html.contains("href=\"/api/v1/estimate/result.csv?age=28&amp;sex=Male\""));
    }

    #[test]
    fn female_selection_round_trips_into_form() {
        let profile = HabitProfile {
            sex: "woman".to_string(),
            ..HabitProfile::default()
        };
        let html = render_form_page(&profile, None);
        assert!(html.contains("<option value=\"Female\" selected>Female</option>"));
        assert!(html.contains("<option value=\"Male\">Male</option>"));
    }
}
