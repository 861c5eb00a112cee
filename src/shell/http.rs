use axum::{
    Router,
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;

use crate::modules::operations::use_cases::list_operations::inbound::http as list_http;
use crate::modules::operations::use_cases::record_operation::inbound::http as record_http;
use crate::shared::http::api_error::ApiError;
use crate::shell::health;
use crate::shell::state::AppState;

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn history_routes() -> MethodRouter<AppState> {
    get(list_http::handle).post(record_http::handle)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handle))
        .route("/health/", get(health::handle))
        .route("/history", history_routes())
        .route("/history/", history_routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
