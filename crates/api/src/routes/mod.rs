pub mod admin;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the page and form route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   redirect to /admin
/// /admin                              admin listing
/// /add_politician                     form (GET), submit (POST)
/// /add_project                        form (GET), submit (POST)
///
/// /dashboard                          redirect to /dashboard/
/// /dashboard/                         dashboard page
/// /dashboard/_update/options          dropdown refresh (JSON)
/// /dashboard/_update/promises         promises chart (JSON)
/// /dashboard/_update/projects         projects chart (JSON)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(admin::router())
        .merge(dashboard::router())
}
