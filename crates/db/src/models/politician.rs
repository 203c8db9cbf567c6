//! Politician entity model and DTOs.

use manifesto_core::chart::PromiseCounts;
use manifesto_core::dashboard::Candidate;
use manifesto_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A politician row from the `politicians` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Politician {
    pub id: DbId,
    pub name: String,
    pub party: String,
    pub age: i64,
    pub promises_made: i64,
    pub promises_fulfilled: i64,
    pub promises_in_progress: i64,
    pub promises_dont_care: i64,
}

impl Politician {
    /// The three sub-counts charted on the dashboard.
    pub fn promise_counts(&self) -> PromiseCounts {
        PromiseCounts {
            fulfilled: self.promises_fulfilled,
            in_progress: self.promises_in_progress,
            dont_care: self.promises_dont_care,
        }
    }

    pub fn as_candidate(&self) -> Candidate<'_> {
        Candidate {
            id: self.id,
            name: &self.name,
        }
    }
}

/// DTO for creating a new politician.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePolitician {
    pub name: String,
    pub party: String,
    pub age: i64,
    pub promises_made: i64,
    pub promises_fulfilled: i64,
    pub promises_in_progress: i64,
    pub promises_dont_care: i64,
}
