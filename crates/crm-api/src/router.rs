//! Route definitions for the CRM HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// The `/api` routes with state applied.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(company_routes())
        .merge(deal_routes())
        .merge(task_routes())
        .merge(pipeline_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Sign-in and current session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signin", post(handlers::auth::sign_in))
        .route("/auth/session", get(handlers::auth::session))
}

fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            get(handlers::contact::list_contacts).post(handlers::contact::create_contact),
        )
        .route("/contacts/{id}", put(handlers::contact::update_contact))
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(handlers::company::list_companies).post(handlers::company::create_company),
        )
        .route("/companies/{id}", put(handlers::company::update_company))
}

fn deal_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/deals",
            get(handlers::deal::list_deals).post(handlers::deal::create_deal),
        )
        .route(
            "/deals/{id}",
            get(handlers::deal::get_deal)
                .put(handlers::deal::update_deal)
                .delete(handlers::deal::delete_deal),
        )
}

/// Tasks of the current user
fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::task::list_tasks).post(handlers::task::create_task),
        )
        .route("/tasks/{id}", put(handlers::task::update_task))
}

fn pipeline_routes() -> Router<AppState> {
    Router::new().route("/pipelines", get(handlers::pipeline::list_pipelines))
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
