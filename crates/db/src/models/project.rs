//! Project entity model and DTOs.

use manifesto_core::chart::ProjectOutcome;
use manifesto_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    /// Free-text label such as "Completed" or "Delayed".
    pub status: String,
    /// Percentage measured one year after completion. Not range-checked.
    pub success_rate: f64,
}

impl Project {
    pub fn as_outcome(&self) -> ProjectOutcome<'_> {
        ProjectOutcome {
            name: &self.name,
            status: &self.status,
            success_rate: self.success_rate,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub name: String,
    pub status: String,
    pub success_rate: f64,
}
