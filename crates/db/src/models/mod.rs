//! Row models and creation DTOs, one module per table.

pub mod politician;
pub mod project;
