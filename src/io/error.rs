//! Error types for dataset loading, chart rendering and batch configuration

use std::fmt;
use std::path::PathBuf;

/// Main error type for all weakness analysis operations
#[derive(Debug)]
pub enum WeakmapError {
    /// Failed to read a dataset file from the filesystem
    DatasetRead {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dataset content is not the expected JSON shape
    ///
    /// Covers missing record fields as well as weakness names outside the
    /// element universe
    DatasetParse {
        /// Path to the dataset file (or `<memory>` for in-memory data)
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A region mode references a region missing from the zone dataset
    UnknownRegion {
        /// The region name that could not be resolved
        region: String,
    },

    /// Failed to load an icon or logo asset
    AssetLoad {
        /// Path to the asset file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered chart to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The plotting backend rejected a drawing operation
    Chart {
        /// Which chart was being drawn
        chart: &'static str,
        /// Backend error description
        reason: String,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for WeakmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetRead { path, source } => {
                write!(f, "Failed to read dataset '{}': {source}", path.display())
            }
            Self::DatasetParse { path, source } => {
                write!(f, "Malformed dataset '{}': {source}", path.display())
            }
            Self::UnknownRegion { region } => {
                write!(f, "Region '{region}' is not present in the zone dataset")
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load asset '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Chart { chart, reason } => {
                write!(f, "Failed to draw {chart} chart: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for WeakmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::DatasetRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::DatasetParse { source, .. } => Some(source),
            Self::UnknownRegion { .. } | Self::Chart { .. } | Self::InvalidParameter { .. } => {
                None
            }
        }
    }
}

/// Convenience type alias for weakmap results
pub type Result<T> = std::result::Result<T, WeakmapError>;

impl From<image::ImageError> for WeakmapError {
    fn from(err: image::ImageError) -> Self {
        Self::AssetLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WeakmapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WeakmapError {
    WeakmapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a chart backend error from any displayable plotting failure
pub fn chart_error(chart: &'static str, reason: &impl ToString) -> WeakmapError {
    WeakmapError::Chart {
        chart,
        reason: reason.to_string(),
    }
}
