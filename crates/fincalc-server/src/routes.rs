//! API routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Catalogue
        .route("/calculators", get(handlers::list_calculators))
        // Calculators
        .route("/calculate/emi/schedule", post(handlers::emi_schedule))
        .route("/calculate/:calculator", post(handlers::calculate))
}
