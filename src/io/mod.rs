//! Input/output: CLI and batch driver, configuration, assets, progress and errors

/// Command-line interface and batch driver
pub mod cli;
/// Default paths, chart geometry and the batch plan
pub mod configuration;
/// Error types for all operations
pub mod error;
/// Asset loading, compositing and PNG export
pub mod image;
/// Progress display over batch runs
pub mod progress;
