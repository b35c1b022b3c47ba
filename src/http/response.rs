//! Response construction.
//!
//! # Responsibilities
//! - Serialize a [`ResponseRecord`] into a JSON or HTML response
//! - Map serialization or render failure to 500 with an empty body
//!
//! # Design Decisions
//! - The body is fully serialized before the response is built, so a failure
//!   never leaves a partial body on the wire

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::echo::{html, ResponseRecord};

/// JSON body with the configured Content-Type.
pub fn json_response(record: &ResponseRecord, content_type: &HeaderValue) -> Response {
    match serde_json::to_vec(record) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type.clone())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response record");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Rendered HTML page, `text/html; charset=utf-8`.
pub fn html_response(record: &ResponseRecord) -> Response {
    rendered_response(html::render(record))
}

fn rendered_response(rendered: Result<String, askama::Error>) -> Response {
    match rendered {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render HTML page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
