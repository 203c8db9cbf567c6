//! Handlers for the add-politician and add-project forms.
//!
//! `GET` renders the empty form. `POST` coerces every field first, inserts
//! only if all of them are valid, then redirects back to the admin listing.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use manifesto_core::error::CoreError;
use manifesto_core::forms::FormFields;
use manifesto_db::models::politician::CreatePolitician;
use manifesto_db::models::project::CreateProject;
use manifesto_db::repositories::{PoliticianRepo, ProjectRepo};

use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

/// GET /add_politician
pub async fn politician_form() -> Html<String> {
    Html(pages::forms::politician_form())
}

/// POST /add_politician
pub async fn submit_politician(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> AppResult<Redirect> {
    let input = politician_from_form(&FormFields::from(fields))?;
    let politician = PoliticianRepo::create(&state.pool, &input).await?;
    tracing::info!(politician_id = politician.id, name = %politician.name, "Politician added");
    Ok(Redirect::to("/admin"))
}

/// GET /add_project
pub async fn project_form() -> Html<String> {
    Html(pages::forms::project_form())
}

/// POST /add_project
pub async fn submit_project(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> AppResult<Redirect> {
    let input = project_from_form(&FormFields::from(fields))?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project added");
    Ok(Redirect::to("/admin"))
}

pub fn politician_from_form(fields: &FormFields) -> Result<CreatePolitician, CoreError> {
    Ok(CreatePolitician {
        name: fields.text("name")?,
        party: fields.text("party")?,
        age: fields.int("age")?,
        promises_made: fields.int("promises_made")?,
        promises_fulfilled: fields.int("promises_fulfilled")?,
        promises_in_progress: fields.int("promises_in_progress")?,
        promises_dont_care: fields.int("promises_dont_care")?,
    })
}

pub fn project_from_form(fields: &FormFields) -> Result<CreateProject, CoreError> {
    Ok(CreateProject {
        name: fields.text("name")?,
        status: fields.text("status")?,
        success_rate: fields.float("success_rate")?,
    })
}
