//! Consistent JSON error responses.
//!
//! Every handler funnels unexpected failures through
//! [`store_error_to_response`], so no storage fault ever escapes as a crash
//! or leaks detail to the client.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use travelease_infra::StoreError;

/// Fixed body for unexpected storage/internal failures.
pub const SERVER_ERROR_MSG: &str = "Server error";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "storage call failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MSG)
}
