use axum::Router;

pub mod departments;
pub mod employees;
pub mod health;

/// Creates the API routes, mounted at the root.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(domain_departments::entity::Model::URL, departments::router(state))
        .nest(domain_employees::entity::Model::URL, employees::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
