//! HTTP surface for the site's pages.
//!
//! Content resolution never produces an error response: unknown
//! languages fall back, and only total unavailability yields the
//! neutral 503 placeholder body. External-collaborator failures
//! (movies, submission, inquiry) are scoped to their own endpoint and
//! reported inline.

use crate::config::Config;
use crate::content::{ContentRegistry, Language, LanguageProvider, LanguageRegistry, Page, Resolution};
use crate::festival::{self, FestivalSubmission};
use crate::inference;
use crate::movies;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ContentRegistry>,
    pub language: LanguageProvider,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Arc<Config>, registry: Arc<ContentRegistry>) -> Self {
        Self {
            config,
            registry,
            language: LanguageProvider::default(),
            client: reqwest::Client::new(),
        }
    }
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("content not available")]
    ContentUnavailable,

    #[error("{0}")]
    InvalidSubmission(String),

    #[error("upstream service failed")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnknownPage(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::ContentUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            ApiError::InvalidSubmission(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::Upstream(e) => {
                error!("upstream failure: {:#}", e);
                (StatusCode::BAD_GATEWAY, "upstream service failed".to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/languages", get(list_languages))
        .route("/api/v1/languages/active", post(set_active_language))
        .route("/api/v1/content/:page", get(page_content))
        .route("/api/v1/movies", get(popular_movies))
        .route("/api/v1/festivals", post(create_festival))
        .route("/api/v1/inquiry", post(festival_inquiry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct LanguageInfo {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    active: bool,
}

/// The Active Language Provider surface: supported languages plus the
/// currently selected one.
async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    let active = state.language.current();
    let languages = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|lang| LanguageInfo {
            code: lang.code,
            name: lang.name,
            native_name: lang.native_name,
            active: lang.code == active.code(),
        })
        .collect();
    Json(languages)
}

#[derive(Debug, Deserialize)]
struct SetLanguageRequest {
    code: String,
}

async fn set_active_language(
    State(state): State<AppState>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<StatusCode, ApiError> {
    match Language::from_code(&request.code) {
        Ok(language) => {
            state.language.set(language);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => Err(ApiError::InvalidSubmission(e.to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct ContentQuery {
    lang: Option<String>,
}

/// Resolve one page's localized bundle. `lang` defaults to the active
/// language; unknown codes fall back to the default bundle.
async fn page_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = Page::from_slug(&page).ok_or_else(|| ApiError::UnknownPage(page.clone()))?;

    let code = query
        .lang
        .unwrap_or_else(|| state.language.current().code().to_string());

    match state.registry.resolve_value(page, &code) {
        Resolution::Ready(bundle) => Ok(Json(bundle)),
        Resolution::Unavailable => Err(ApiError::ContentUnavailable),
    }
}

#[derive(Debug, Serialize)]
struct MoviesResponse {
    movies: Vec<movies::Movie>,
}

/// Popular movies for the movies page. Upstream failure degrades to an
/// empty list, matching how the page renders it.
async fn popular_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let movies = match movies::fetch_popular_movies(&state.client, &state.config).await {
        Ok(movies) => movies,
        Err(e) => {
            warn!("failed to fetch popular movies: {:#}", e);
            Vec::new()
        }
    };
    Json(MoviesResponse { movies })
}

#[derive(Debug, Serialize)]
struct SubmissionResponse {
    id: Option<String>,
}

async fn create_festival(
    State(state): State<AppState>,
    Json(submission): Json<FestivalSubmission>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    // Validation failures are the submitter's to fix; upstream failures
    // are not
    submission
        .validate()
        .map_err(|e| ApiError::InvalidSubmission(e.to_string()))?;

    let id = festival::submit_festival(&state.client, &state.config, &submission).await?;
    Ok((StatusCode::CREATED, Json(SubmissionResponse { id })))
}

#[derive(Debug, Deserialize)]
struct InquiryRequest {
    question: String,
}

#[derive(Debug, Serialize)]
struct InquiryResponse {
    answer: String,
}

async fn festival_inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::InvalidSubmission(
            "Question must not be empty".to_string(),
        ));
    }

    let answer = inference::answer_inquiry(&state.client, &state.config, &request.question).await?;
    Ok(Json(InquiryResponse { answer }))
}
