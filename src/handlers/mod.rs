//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod root;

use axum::http::StatusCode;

/// Unknown paths and unsupported methods on known paths both answer 404.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
