//! Integration tests for politician and project persistence.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Create returns the stored row with a fresh id
//! - Listing preserves insertion order
//! - Lookup of a missing id is `None`, not an error

use manifesto_db::models::politician::CreatePolitician;
use manifesto_db::models::project::CreateProject;
use manifesto_db::repositories::{PoliticianRepo, ProjectRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_politician(name: &str) -> CreatePolitician {
    CreatePolitician {
        name: name.to_string(),
        party: "P1".to_string(),
        age: 40,
        promises_made: 10,
        promises_fulfilled: 4,
        promises_in_progress: 3,
        promises_dont_care: 3,
    }
}

fn new_project(name: &str, status: &str, success_rate: f64) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        status: status.to_string(),
        success_rate,
    }
}

// ---------------------------------------------------------------------------
// Politicians
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_politician_round_trips_fields(pool: SqlitePool) {
    let input = new_politician("A");
    let created = PoliticianRepo::create(&pool, &input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "A");
    assert_eq!(created.party, "P1");
    assert_eq!(created.age, 40);
    assert_eq!(created.promises_made, 10);
    assert_eq!(created.promises_fulfilled, 4);
    assert_eq!(created.promises_in_progress, 3);
    assert_eq!(created.promises_dont_care, 3);

    let found = PoliticianRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("politician should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_unique_ids(pool: SqlitePool) {
    let a = PoliticianRepo::create(&pool, &new_politician("A")).await.unwrap();
    let b = PoliticianRepo::create(&pool, &new_politician("A")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(PoliticianRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_politicians_in_insertion_order(pool: SqlitePool) {
    for name in ["Zed", "Amy", "Moe"] {
        PoliticianRepo::create(&pool, &new_politician(name)).await.unwrap();
    }

    let names: Vec<String> = PoliticianRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Zed", "Amy", "Moe"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_politician_is_none(pool: SqlitePool) {
    let found = PoliticianRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_politician_text_is_stored_verbatim(pool: SqlitePool) {
    let mut input = new_politician("  O'Brien <MP>  ");
    input.party = "Party & Co".to_string();
    let created = PoliticianRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.name, "  O'Brien <MP>  ");
    assert_eq!(created.party, "Party & Co");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_round_trips_fields(pool: SqlitePool) {
    let created = ProjectRepo::create(&pool, &new_project("Bridge", "Completed", 85.5))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Bridge");
    assert_eq!(created.status, "Completed");
    assert_eq!(created.success_rate, 85.5);

    let found = ProjectRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_success_rate_is_not_range_checked(pool: SqlitePool) {
    let over = ProjectRepo::create(&pool, &new_project("Dam", "Completed", 140.0))
        .await
        .unwrap();
    let under = ProjectRepo::create(&pool, &new_project("Road", "Delayed", -5.25))
        .await
        .unwrap();
    assert_eq!(over.success_rate, 140.0);
    assert_eq!(under.success_rate, -5.25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_in_insertion_order(pool: SqlitePool) {
    ProjectRepo::create(&pool, &new_project("Road", "Delayed", 10.0)).await.unwrap();
    ProjectRepo::create(&pool, &new_project("Bridge", "Completed", 85.5)).await.unwrap();

    let projects = ProjectRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Road", "Bridge"]);
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_project_is_none(pool: SqlitePool) {
    assert!(ProjectRepo::find_by_id(&pool, 42).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tables_are_independent(pool: SqlitePool) {
    PoliticianRepo::create(&pool, &new_politician("A")).await.unwrap();
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
    assert_eq!(PoliticianRepo::count(&pool).await.unwrap(), 1);
}
