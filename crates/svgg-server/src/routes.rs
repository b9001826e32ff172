use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use svgg_core::{types::token_from_segment, Reference, SvggError};
use tracing::{info, warn};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const STYLE_CSS: &str = include_str!("../static/style.css");

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/{*path}", get(static_asset))
}

pub fn svg_routes() -> Router<AppState> {
    Router::new()
        .route("/svg/", post(create))
        .route("/oo/", get(read_empty))
        .route("/oo/{*file}", get(read))
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub content: String,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.form()?))
}

async fn static_asset(Path(path): Path<String>) -> Result<Response, ApiError> {
    match path.as_str() {
        "style.css" => Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS).into_response()),
        _ => Err(ApiError::not_found(format!("no such asset: {path}"))),
    }
}

async fn create(
    State(state): State<AppState>,
    parts: Parts,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|rej| ApiError::new(rej.status(), "bad_request", rej.body_text()))?;

    let token = state.pipeline.submit(&form.content)?;
    let host = request_host(&parts).ok_or_else(|| ApiError::bad_request("missing host"))?;
    let scheme = state.scheme_policy.scheme(&parts);
    let link = Reference::new(scheme, host, &token);
    info!(href = %link.href, "created link");

    if accepts_json(&parts.headers) {
        return Ok(Json(link).into_response());
    }
    Ok(Html(state.templates.result(&link.href)?).into_response())
}

async fn read(State(state): State<AppState>, Path(file): Path<String>) -> Result<Response, ApiError> {
    resolve(&state, token_from_segment(&file))
}

// `{*file}` never matches an empty remainder.
async fn read_empty(State(state): State<AppState>) -> Result<Response, ApiError> {
    resolve(&state, "")
}

fn resolve(state: &AppState, token: &str) -> Result<Response, ApiError> {
    let data = state.pipeline.resolve(token).map_err(|err| match err {
        // The decoded content goes to the log, never back to the client.
        err @ SvggError::InvalidSvg { .. } => {
            warn!("{err}");
            ApiError::bad_request("invalid svg")
        }
        other => ApiError::from(other),
    })?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], data).into_response())
}

fn request_host(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .filter(|h| !h.is_empty())
}

/// Whether `Accept` lists `application/json`; media type parameters are ignored.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|item| item.split(';').next())
        .any(|media| media.trim().eq_ignore_ascii_case("application/json"))
}
