//! Domain logic for the manifesto tracker.
//!
//! Nothing in this crate touches the database: callers load rows and pass
//! plain values in, and get figures, selections, or coerced fields back.

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod html;
pub mod types;
