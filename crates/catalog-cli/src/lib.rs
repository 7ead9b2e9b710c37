//! CLI library components for the course catalog importer.

pub mod logging;
pub mod summary;
