use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use chrono::Utc;

use travelease_core::{validate_booking, BookingRequest, DomainError};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(create_booking))
}

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<BookingRequest>,
) -> axum::response::Response {
    let booking = match validate_booking(body, Utc::now()) {
        Ok(b) => b,
        Err(DomainError::Validation(msg)) => {
            return errors::json_error(StatusCode::BAD_REQUEST, msg)
        }
        // Only validation failures are client-caused; anything else the
        // domain layer might grow must not surface as a 400.
        Err(e) => {
            tracing::error!(error = %e, "unexpected booking validation failure");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, errors::SERVER_ERROR_MSG);
        }
    };

    match services.bookings.insert(&booking).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
