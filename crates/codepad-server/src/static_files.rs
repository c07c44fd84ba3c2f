//! Static file fallback for everything that is not an API route

use std::path::{Component, Path, PathBuf};

use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::AppState;

const INDEX: &str = "index.html";

/// Handler for `/{*path}`; the capture arrives percent-decoded
pub async fn serve_path(
    State(state): State<AppState>,
    method: Method,
    AxumPath(path): AxumPath<String>,
) -> Response {
    serve_rel(&state, &method, &path).await
}

/// Router fallback and non-POST methods on the API routes
///
/// Only literal routes and `/` land here, so the raw URI path needs no
/// decoding.
pub async fn serve(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    serve_rel(&state, &method, uri.path()).await
}

async fn serve_rel(state: &AppState, method: &Method, raw_path: &str) -> Response {
    if *method != Method::GET && *method != Method::HEAD {
        return not_found();
    }

    let Some(rel) = sanitize_rel_path(raw_path) else {
        tracing::warn!(path = %raw_path, "rejected static path");
        return (StatusCode::BAD_REQUEST, "invalid path").into_response();
    };

    match resolve_static_file(&state.static_dir, &rel) {
        Some(file) => serve_file(&file).await,
        None => {
            tracing::debug!(path = %raw_path, "static file not found");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

/// Relative path with no parent, root or prefix components
pub fn sanitize_rel_path(path: &str) -> Option<PathBuf> {
    let rel = PathBuf::from(path.trim_start_matches('/'));
    for comp in rel.components() {
        if matches!(
            comp,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        ) {
            return None;
        }
    }
    Some(rel)
}

/// Existing file for `rel`; directories resolve to their `index.html`
pub fn resolve_static_file(root: &Path, rel: &Path) -> Option<PathBuf> {
    let mut full = root.join(rel);
    if full.is_dir() {
        full.push(INDEX);
    }
    full.is_file().then_some(full)
}

async fn serve_file(path: &Path) -> Response {
    let bytes = match tokio::fs::read(path).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read static file");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to read {}: {e}", path.display()),
            )
                .into_response();
        }
    };

    let mut response = bytes.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type(path)),
    );
    response
}

fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
    {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}
