//! Human resources HTTP service.
//!
//! Employees and departments over a relational store, served by axum with the
//! shared `axum-helpers` pipeline in front of every route.

use axum::Router;
use axum_helpers::{apply_pipeline, server::health_router};

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Routes, docs, fallback, `/health` and `/ready`, without the request pipeline.
pub fn router(state: &AppState) -> Router {
    let api_routes = api::routes(state);

    // create_router adds docs, the JSON 404 fallback and compression
    axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.environment)
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
}

/// The complete application.
///
/// The pipeline goes on last so it also wraps the fallback and the health
/// endpoints.
pub fn build_app(state: &AppState) -> Router {
    apply_pipeline(router(state))
}
