//! Request handlers.
//!
//! Handlers delegate persistence to the repositories in `manifesto_db`,
//! pure logic to `manifesto_core`, markup to [`crate::pages`], and map
//! errors via [`crate::error::AppError`].

pub mod admin;
pub mod dashboard;
pub mod records;
