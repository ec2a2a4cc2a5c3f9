//! Elemental weakness analysis for a bestiary
//!
//! Mobs are filtered by category and region, then aggregated two ways: how many
//! mobs each combination of weaknesses covers, and how often two weaknesses
//! appear on the same mob. Both results are rendered as charts decorated with
//! element icons and a region logo.

#![forbid(unsafe_code)]

/// Weakness coverage and co-occurrence aggregations
pub mod analysis;
/// Element universe, datasets and filter presets
pub mod bestiary;
/// Bar chart and heatmap rendering
pub mod chart;
/// Input/output operations, batch driver and error handling
pub mod io;

pub use io::error::{Result, WeakmapError};
