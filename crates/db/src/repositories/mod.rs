//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Records are only ever
//! created and read.

pub mod politician_repo;
pub mod project_repo;

pub use politician_repo::PoliticianRepo;
pub use project_repo::ProjectRepo;
