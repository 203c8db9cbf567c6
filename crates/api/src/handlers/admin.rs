//! Handlers for the admin listing.

use axum::extract::State;
use axum::response::{Html, Redirect};
use manifesto_db::repositories::{PoliticianRepo, ProjectRepo};

use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/admin")
}

/// GET /admin
pub async fn admin_view(State(state): State<AppState>) -> AppResult<Html<String>> {
    let politicians = PoliticianRepo::list(&state.pool).await?;
    let projects = ProjectRepo::list(&state.pool).await?;
    let totals = pages::admin::Totals {
        politicians: PoliticianRepo::count(&state.pool).await?,
        projects: ProjectRepo::count(&state.pool).await?,
    };
    Ok(Html(pages::admin::render(&politicians, &projects, totals)))
}
