use crate::error::{AppError, Result};
use crate::model::{ResolveResponse, ShortenRequest, ShortenResponse};
use crate::state::{AppState, ResolveMode};
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use pinhole_core::ShortCode;
use tracing::{debug, info};

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let code = state.shortener().create(&request.long_url).await?;
    info!(code = %code, "shortened url");

    Ok(Json(ShortenResponse {
        short_url: code.to_url(state.base_url()),
    }))
}

pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    resolve_code(&state, short_code).await
}

/// Resolves the code `shorten`, whose path is shared with `POST /shorten`.
pub async fn resolve_shorten_handler(State(state): State<AppState>) -> Result<Response> {
    resolve_code(&state, "shorten".to_string()).await
}

async fn resolve_code(state: &AppState, short_code: String) -> Result<Response> {
    // a malformed code was never handed out
    let code = ShortCode::new(short_code).map_err(|e| {
        debug!(error = %e, "rejecting malformed short code");
        AppError::NotFound
    })?;

    let long_url = state.shortener().resolve(&code).await?;

    match state.resolve_mode() {
        ResolveMode::Json => Ok(Json(ResolveResponse { long_url }).into_response()),
        ResolveMode::Redirect => {
            let location =
                HeaderValue::try_from(long_url).map_err(|_| AppError::InvalidRedirectTarget)?;
            Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
        }
    }
}
