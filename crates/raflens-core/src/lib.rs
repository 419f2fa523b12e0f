//! raflens-core
//!
//! Pure domain types, the extraction response schema, and derived condition
//! statistics. No AWS SDK dependency: this is the shared vocabulary of the
//! RafLens system.

pub mod models;
pub mod schema;
pub mod statistics;
pub mod view;
