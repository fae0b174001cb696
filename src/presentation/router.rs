// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_controls, get_deck, get_trend, health_check, stream_deck, toggle_mode, toggle_relay,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/deck", get(get_deck))
        .route("/deck/trend", get(get_trend))
        .route("/deck/controls", get(get_controls))
        .route("/deck/relays/:key/toggle", post(toggle_relay))
        .route("/deck/mode/toggle", post(toggle_mode))
        .route("/deck/stream", get(stream_deck))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
