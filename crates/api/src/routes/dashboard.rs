//! Route definitions for the dashboard page and its update endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET /dashboard                      -> redirect_to_page
/// GET /dashboard/                     -> page
/// GET /dashboard/_update/options      -> options
/// GET /dashboard/_update/promises     -> promises
/// GET /dashboard/_update/projects     -> projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::redirect_to_page))
        .route("/dashboard/", get(dashboard::page))
        .route("/dashboard/_update/options", get(dashboard::options))
        .route("/dashboard/_update/promises", get(dashboard::promises))
        .route("/dashboard/_update/projects", get(dashboard::projects))
}
