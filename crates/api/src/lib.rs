//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the impact calculator
//! - JSON error responses
//! - Response types with formatted displays

pub mod routes;

use axum::Router;
use cockpit_core::{ReferenceError, ReferenceTable};
use cockpit_shared::config::ModelConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Immutable: every request recomputes from the reference table.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Reference table served by this instance.
    pub reference: &'static ReferenceTable,
}

impl AppState {
    /// Creates state over a reference table.
    #[must_use]
    pub const fn new(reference: &'static ReferenceTable) -> Self {
        Self { reference }
    }

    /// Creates state from the model configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnknownVintage` if the configured vintage
    /// is not published.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ReferenceError> {
        ReferenceTable::by_vintage(&config.reference_vintage).map(Self::new)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
