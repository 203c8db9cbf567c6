//! Handlers for the politician dashboard.
//!
//! The page itself plus three update endpoints, one per reactive
//! transition: refreshing the dropdown, redrawing the promises pie for the
//! selected politician, and redrawing the project success-rate bars.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Json;
use manifesto_core::chart::svg::{render_bar, render_pie, render_placeholder};
use manifesto_core::chart::{projects_figure, promises_figure, BarFigure, PieFigure};
use manifesto_core::dashboard::{refresh_options, DropdownState};
use manifesto_core::types::DbId;
use manifesto_db::models::politician::Politician;
use manifesto_db::models::project::Project;
use manifesto_db::repositories::{PoliticianRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

/// Shown in the promises chart when no politician is selected or the
/// selected id does not exist.
pub const NO_SELECTION_MESSAGE: &str = "Select a politician to see their promises";

// ---------------------------------------------------------------------------
// Query and response types
// ---------------------------------------------------------------------------

/// Query for the page itself (`?politician_id=&search=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub politician_id: Option<String>,
    #[serde(default)]
    pub search: String,
}

/// Query for the options refresh (`?search=&selected=`).
#[derive(Debug, Default, Deserialize)]
pub struct OptionsParams {
    #[serde(default)]
    pub search: String,
    pub selected: Option<String>,
}

/// Query for the promises chart (`?politician_id=`).
#[derive(Debug, Default, Deserialize)]
pub struct PromisesParams {
    pub politician_id: Option<String>,
}

/// The promises chart: its figure (absent when nothing is selected) and
/// the rendered SVG.
#[derive(Debug, Serialize)]
pub struct PromisesChart {
    pub figure: Option<PieFigure>,
    pub svg: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsChart {
    pub figure: BarFigure,
    pub svg: String,
}

/// Selections arrive as raw text from the browser. Blank or non-numeric
/// values select nothing rather than failing the request.
fn parse_selection(raw: Option<&str>) -> Option<DbId> {
    raw.and_then(|s| s.trim().parse().ok())
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

pub fn promises_chart(politician: Option<&Politician>) -> PromisesChart {
    match politician {
        Some(p) => {
            let figure = promises_figure(&p.name, p.promise_counts());
            let svg = render_pie(&figure);
            PromisesChart {
                figure: Some(figure),
                svg,
            }
        }
        None => PromisesChart {
            figure: None,
            svg: render_placeholder(NO_SELECTION_MESSAGE),
        },
    }
}

pub fn projects_chart(projects: &[Project]) -> ProjectsChart {
    let figure = projects_figure(projects.iter().map(Project::as_outcome));
    let svg = render_bar(&figure);
    ProjectsChart { figure, svg }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /dashboard
pub async fn redirect_to_page() -> Redirect {
    Redirect::permanent("/dashboard/")
}

/// GET /dashboard/
///
/// Runs all three transitions server-side so the first paint is complete.
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    let politicians = PoliticianRepo::list(&state.pool).await?;
    let dropdown = refresh_options(
        politicians.iter().map(Politician::as_candidate),
        &params.search,
        parse_selection(params.politician_id.as_deref()),
        state.config.selection_policy,
    );

    let selected = dropdown
        .value
        .and_then(|id| politicians.iter().find(|p| p.id == id));
    let promises = promises_chart(selected);

    let projects = ProjectRepo::list(&state.pool).await?;
    let projects = projects_chart(&projects);

    Ok(Html(pages::dashboard::render(
        &dropdown,
        &params.search,
        &promises.svg,
        &projects.svg,
    )))
}

/// GET /dashboard/_update/options
pub async fn options(
    State(state): State<AppState>,
    Query(params): Query<OptionsParams>,
) -> AppResult<Json<DropdownState>> {
    let politicians = PoliticianRepo::list(&state.pool).await?;
    let dropdown = refresh_options(
        politicians.iter().map(Politician::as_candidate),
        &params.search,
        parse_selection(params.selected.as_deref()),
        state.config.selection_policy,
    );
    tracing::debug!(
        search = %params.search,
        options = dropdown.options.len(),
        value = ?dropdown.value,
        "Refreshed dashboard options"
    );
    Ok(Json(dropdown))
}

/// GET /dashboard/_update/promises
pub async fn promises(
    State(state): State<AppState>,
    Query(params): Query<PromisesParams>,
) -> AppResult<Json<PromisesChart>> {
    let politician = match parse_selection(params.politician_id.as_deref()) {
        Some(id) => PoliticianRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    Ok(Json(promises_chart(politician.as_ref())))
}

/// GET /dashboard/_update/projects
pub async fn projects(State(state): State<AppState>) -> AppResult<Json<ProjectsChart>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects_chart(&projects)))
}
