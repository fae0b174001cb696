// HTTP request handlers
use crate::domain::error::DeckError;
use crate::infrastructure::chunked_json::stream_response;
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// Whether `Accept-Encoding` lists `br` with a non-zero quality
fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get("accept-encoding")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(is_brotli_allowed))
        .unwrap_or(false)
}

fn is_brotli_allowed(token: &str) -> bool {
    let mut parts = token.split(';').map(str::trim);
    if !parts.next().is_some_and(|coding| coding.eq_ignore_ascii_case("br")) {
        return false;
    }

    // q=0 means "not acceptable"; a malformed q value is treated as refusal
    parts
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
        .map(|(_, q)| q.trim().parse::<f32>().is_ok_and(|q| q > 0.0))
        .unwrap_or(true)
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard
pub async fn get_deck(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&state.deck_service.deck(), &headers).await
}

/// Voltage trend bars
pub async fn get_trend(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(state.deck_service.trend(), &headers).await
}

/// Current relays and mode
pub async fn get_controls(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&state.deck_service.controls(), &headers).await
}

/// Flip one relay
pub async fn toggle_relay(
    Path(key): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DeckError> {
    let controls = state.deck_service.flip_relay(&key)?;
    Ok(respond(&controls, &headers).await)
}

/// Flip between automatic and manual mode
pub async fn toggle_mode(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let controls = state.deck_service.flip_mode();
    respond(&controls, &headers).await
}

/// Stream the deck, then every control change (length-prefixed JSON chunks)
pub async fn stream_deck(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let stream = state.streaming_service.stream_deck();
    stream_response(stream, accepts_brotli(&headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert("accept-encoding", HeaderValue::from_static("gzip, deflate"));
        assert!(!accepts_brotli(&headers));

        headers.insert("accept-encoding", HeaderValue::from_static("gzip, br"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_brotli_quality_values() {
        let mut headers = HeaderMap::new();

        headers.insert("accept-encoding", HeaderValue::from_static("gzip, br;q=0"));
        assert!(!accepts_brotli(&headers));

        headers.insert("accept-encoding", HeaderValue::from_static("br; q=0.0, gzip"));
        assert!(!accepts_brotli(&headers));

        headers.insert("accept-encoding", HeaderValue::from_static("gzip;q=1.0, BR;q=0.5"));
        assert!(accepts_brotli(&headers));

        headers.insert("accept-encoding", HeaderValue::from_static("brotli, gzip"));
        assert!(!accepts_brotli(&headers));
    }
}
