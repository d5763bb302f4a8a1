use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, resolve_handler, resolve_shorten_handler, root_handler, shorten_handler,
};
use crate::state::AppState;

/// Path of the liveness probe. Two segments, so it never shadows a code.
pub const HEALTH_PATH: &str = "/-/health";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(root_handler))
            .route(HEALTH_PATH, get(health_handler))
            // "shorten" is itself a valid code, so GET on it still resolves
            .route(
                "/shorten",
                get(resolve_shorten_handler).post(shorten_handler),
            )
            .route("/{short_code}", get(resolve_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
