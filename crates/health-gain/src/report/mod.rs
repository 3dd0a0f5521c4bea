mod export;
mod page;
pub mod views;

pub use export::{detail_csv, summary_text, ExportError, CSV_CONTENT_TYPE, SUMMARY_CONTENT_TYPE};
pub use page::{render_form_page, render_result_page, DownloadLinks};
pub use views::{gentle_tips, progress_fraction, GainReport, PROGRESS_CAP_MONTHS};

pub const PAGE_TITLE: &str = "AI Health Gain — Demo";
pub const TAGLINE: &str =
    "See how small changes can lead to visible health gains. Educational concept only — not medical advice.";
pub const DISCLAIMER: &str = "Disclaimer: Educational demo only — not medical advice. \
     Parameters are placeholders and will be calibrated with peer-reviewed evidence and local data.";
