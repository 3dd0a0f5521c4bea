use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::error::AppError;
use crate::estimator::{GainEstimator, HabitProfile, InputError};
use crate::report::{
    detail_csv, render_form_page, render_result_page, summary_text, DownloadLinks, GainReport,
    CSV_CONTENT_TYPE, SUMMARY_CONTENT_TYPE,
};

pub const ESTIMATE_PAGE_PATH: &str = "/estimate";
pub const ESTIMATE_API_PATH: &str = "/api/v1/estimate";
pub const SUMMARY_PATH: &str = "/api/v1/estimate/summary.txt";
pub const CSV_PATH: &str = "/api/v1/estimate/result.csv";

/// Shared by every handler; cheap to clone per request.
#[derive(Debug, Clone, Default)]
pub struct EstimateState {
    pub estimator: GainEstimator,
    pub export: ExportConfig,
}

/// Router builder exposing the form page, the JSON API and the two downloads.
pub fn estimate_router(state: EstimateState) -> Router {
    Router::new()
        .route("/", get(form_handler))
        .route(ESTIMATE_PAGE_PATH, get(result_page_handler))
        .route(ESTIMATE_API_PATH, post(estimate_api_handler))
        .route(SUMMARY_PATH, get(summary_handler))
        .route(CSV_PATH, get(csv_handler))
        .with_state(state)
}

/// Builds download hrefs that replay the same submission.
pub fn download_links(profile: &HabitProfile) -> DownloadLinks {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("age", &profile.age.to_string())
        .append_pair("sex", &profile.sex)
        .append_pair("drinking_days", &profile.drinking_days.to_string())
        .append_pair("drinks_per_occ", &profile.drinks_per_occ.to_string())
        .append_pair("years_drinking", &profile.years_drinking.to_string())
        .append_pair("target_days", &profile.target_days.to_string())
        .finish();

    DownloadLinks {
        summary: format!("{SUMMARY_PATH}?{query}"),
        csv: format!("{CSV_PATH}?{query}"),
    }
}

pub(crate) async fn form_handler() -> Html<String> {
    Html(render_form_page(&HabitProfile::default(), None))
}

pub(crate) async fn result_page_handler(
    State(state): State<EstimateState>,
    query: Result<Query<HabitProfile>, QueryRejection>,
) -> Response {
    let profile = match query {
        Ok(Query(profile)) => profile,
        Err(rejection) => {
            let message = rejection.body_text();
            warn!(error = %message, "undecodable habit form submission");
            let page = render_form_page(&HabitProfile::default(), Some(message.as_str()));
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
        }
    };

    if let Err(err) = profile.validate() {
        warn!(%err, "rejected habit form submission");
        let page = render_form_page(&profile, Some(&err.to_string()));
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
    }

    let report = build_report(&state, &profile);
    Html(render_result_page(&report, &download_links(&profile))).into_response()
}

pub(crate) async fn estimate_api_handler(
    State(state): State<EstimateState>,
    payload: Result<Json<HabitProfile>, JsonRejection>,
) -> Result<Json<GainReport>, AppError> {
    let Json(profile) = payload.map_err(|rejection| malformed(rejection.body_text()))?;
    checked(&profile)?;
    Ok(Json(build_report(&state, &profile)))
}

pub(crate) async fn summary_handler(
    State(state): State<EstimateState>,
    query: Result<Query<HabitProfile>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(profile) = query.map_err(|rejection| malformed(rejection.body_text()))?;
    checked(&profile)?;
    let result = state.estimator.estimate_profile(&profile);
    let body = summary_text(&profile, &result, Utc::now());
    Ok(attachment(
        body,
        SUMMARY_CONTENT_TYPE,
        &state.export.summary_file_name(),
    ))
}

pub(crate) async fn csv_handler(
    State(state): State<EstimateState>,
    query: Result<Query<HabitProfile>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(profile) = query.map_err(|rejection| malformed(rejection.body_text()))?;
    checked(&profile)?;
    let result = state.estimator.estimate_profile(&profile);
    let body = detail_csv(&result.detail)?;
    Ok(attachment(body, CSV_CONTENT_TYPE, &state.export.csv_file_name()))
}

fn checked(profile: &HabitProfile) -> Result<(), AppError> {
    profile.validate().map_err(|err| {
        warn!(%err, "rejected habit profile");
        AppError::from(err)
    })
}

fn malformed(message: String) -> AppError {
    warn!(error = %message, "undecodable habit profile");
    AppError::from(InputError::Malformed(message))
}

fn build_report(state: &EstimateState, profile: &HabitProfile) -> GainReport {
    let report = GainReport::build(&state.estimator, profile);
    debug!(
        gain_months = report.detail.gain_months,
        rr_now = report.detail.rr_now,
        rr_after = report.detail.rr_after,
        "estimate computed"
    );
    report
}

fn attachment(body: String, content_type: &'static str, file_name: &str) -> Response {
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
