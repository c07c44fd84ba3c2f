//! JSON endpoints
//!
//! The body is taken as raw bytes so that any decoding failure maps to the
//! same `Invalid request body` rejection instead of axum's own messages.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use codepad_core::{api, CodeRequest, QueryRequest, Result};

/// `POST /run`
pub async fn run(body: Bytes) -> Response {
    let result = api::decode::<CodeRequest>(&body).and_then(|req| api::run(&req));
    reply("run", result)
}

/// `POST /autofix`
pub async fn autofix(body: Bytes) -> Response {
    let result = api::decode::<CodeRequest>(&body).and_then(|req| api::autofix(&req));
    reply("autofix", result)
}

/// `POST /help`
pub async fn help(body: Bytes) -> Response {
    let result = api::decode::<QueryRequest>(&body).and_then(|req| api::help(&req));
    reply("help", result)
}

fn reply(endpoint: &'static str, result: Result<String>) -> Response {
    match result {
        Ok(output) => {
            tracing::debug!(endpoint, output_len = output.len(), "request handled");
            Json(api::Response::ok(output)).into_response()
        }
        Err(e) => {
            tracing::warn!(endpoint, error = %e, "request rejected");
            (StatusCode::BAD_REQUEST, Json(api::Response::rejected(&e))).into_response()
        }
    }
}
