//! Route definitions for the admin listing and the record forms.

use axum::routing::get;
use axum::Router;

use crate::handlers::{admin, records};
use crate::state::AppState;

/// ```text
/// GET    /                 -> index (redirect)
/// GET    /admin            -> admin_view
/// GET    /add_politician   -> politician_form
/// POST   /add_politician   -> submit_politician
/// GET    /add_project      -> project_form
/// POST   /add_project      -> submit_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/admin", get(admin::admin_view))
        .route(
            "/add_politician",
            get(records::politician_form).post(records::submit_politician),
        )
        .route(
            "/add_project",
            get(records::project_form).post(records::submit_project),
        )
}
