//! Aggregations over a filtered mob set

/// Mob coverage of every weakness combination of a given size
pub mod combinations;
/// Pairwise weakness co-occurrence matrix
pub mod overlap;
/// Plain-text description of a run's mob set
pub mod summary;
