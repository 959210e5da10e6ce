//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::dashboard::stat_cards;
use crate::domain::{AdminPackage, ClientDemand, Shape, ShapeError, SpecialPackage, from_value};
use crate::i18n::Locale;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/dashboard", get(dashboard_page))
        .route("/locale", post(select_locale))
        .route("/api/locale", get(get_locale).put(put_locale))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route("/api/enums", get(enum_catalog))
        .route("/api/demands/validate", post(validate_demand))
        .route("/api/packages/admin/validate", post(validate_admin_package))
        .route("/api/packages/special/validate", post(validate_special_package))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Landing page with hero, language switcher and call-to-action.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let translator = state.locale.translator().await;
    render(&IndexTemplate::new(&translator, &state.config.cta_target))
}

/// Dashboard overview.
async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let translator = state.locale.translator().await;
    render(&DashboardTemplate::new(&translator))
}

fn parse_locale(code: &str) -> Result<Locale, AppError> {
    Locale::parse(code).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

async fn switch_locale(state: &AppState, locale: Locale) {
    let previous = state.locale.set(locale).await;
    if previous != locale {
        info!(from = %previous, to = %locale, "locale changed");
    }
}

/// Only same-site paths are followed; anything else returns home.
fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

/// Language switcher form target.
async fn select_locale(
    State(state): State<AppState>,
    Form(form): Form<LocaleForm>,
) -> Result<Redirect, AppError> {
    let locale = parse_locale(&form.locale)?;
    switch_locale(&state, locale).await;
    // axum's `Redirect::to` answers 303 See Other
    Ok(Redirect::to(safe_return_path(form.return_to.as_deref())))
}

/// The active locale.
async fn get_locale(State(state): State<AppState>) -> Json<LocaleResponse> {
    Json(LocaleResponse::from_locale(state.locale.current().await))
}

/// Change the active locale.
async fn put_locale(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LocaleResponse>, AppError> {
    let req: SetLocaleRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("Invalid locale request: {}", e),
        })?;
    let locale = parse_locale(&req.locale)?;
    switch_locale(&state, locale).await;
    Ok(Json(LocaleResponse::from_locale(locale)))
}

/// Stat cards in the active locale.
async fn dashboard_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let translator = state.locale.translator().await;
    Json(StatsResponse {
        locale: translator.locale(),
        cards: stat_cards(&translator),
    })
}

/// Member lists of every enumeration.
async fn enum_catalog() -> Json<EnumCatalogResponse> {
    Json(EnumCatalogResponse::build())
}

/// Read a body as JSON, then check it has the shape of `T`.
///
/// The accepted value is echoed back normalized, with derived fields filled
/// in.
fn validate<T: Shape + Serialize>(body: &[u8]) -> Result<Json<T>, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {}", e),
    })?;
    let entity = from_value::<T>(&value).map_err(AppError::Unprocessable)?;
    debug!(entity = T::ENTITY, "shape accepted");
    Ok(Json(entity))
}

async fn validate_demand(body: Bytes) -> Result<Json<ClientDemand>, AppError> {
    validate(&body)
}

async fn validate_admin_package(body: Bytes) -> Result<Json<AdminPackage>, AppError> {
    validate(&body)
}

async fn validate_special_package(body: Bytes) -> Result<Json<SpecialPackage>, AppError> {
    validate(&body)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable(ShapeError),
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::message(message.clone()))
            }
            AppError::Unprocessable(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::from_shape(err))
            }
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message(message.clone()),
            ),
        };

        if status.is_server_error() {
            error!(%status, error = %body.error, "request failed");
        } else {
            warn!(%status, error = %body.error, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}
