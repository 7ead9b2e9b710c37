//! Value-level normalization functions.
//!
//! - **datetime**: feed date parsing and UTC timestamp formatting
//! - **identifier**: URI detection and identifier flattening

pub mod datetime;
pub mod identifier;
