//! Route handlers.
//!
//! Each handler is a stateless request → response mapping; the only shared
//! state is the immutable [`AppState`].

use axum::{
    extract::{Request, State},
    response::Response,
};

use crate::http::request::request_id;
use crate::http::response::{html_response, json_response};
use crate::http::server::AppState;

/// `GET /`: the response record as JSON.
pub async fn info(State(state): State<AppState>, request: Request) -> Response {
    let record = state.builder.build(&request);

    tracing::debug!(
        request_id = %request_id(request.headers()),
        user = %record.authenticated_user(),
        auth_method = %record.auth_method(),
        header_count = record.all_headers().len(),
        "Echoing request as JSON"
    );

    json_response(&record, &state.json_content_type)
}

/// `GET /html`: the response record rendered as a page.
pub async fn html(State(state): State<AppState>, request: Request) -> Response {
    let record = state.builder.build(&request);

    tracing::debug!(
        request_id = %request_id(request.headers()),
        user = %record.authenticated_user(),
        auth_method = %record.auth_method(),
        "Echoing request as HTML"
    );

    html_response(&record)
}

/// `GET /health`: liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
