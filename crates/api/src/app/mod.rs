//! HTTP application wiring (Axum router + store wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring (MongoDB in production, in-memory in tests)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: query-parameter DTOs and their mapping to the core types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    // The service is consumed cross-origin by the storefront; keep it open.
    Router::new()
        .route("/", get(routes::system::root))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(Extension(services)),
        )
}
