//! Error types for tile editor operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all editor and pattern operations
#[derive(Debug)]
pub enum EscherError {
    /// The tiling walk found two tiles at one position with different
    /// orientation or handedness, so the combination cannot tile the plane
    InvalidCombination {
        /// Raw entries of the contradictory combination
        combination: Vec<i32>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A node id does not exist in the shape's arena
    NodeNotFound {
        /// The unknown arena index
        index: usize,
    },

    /// The shape has no movable nodes to select
    NoMovableNodes,

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or decode a persisted pattern
    PatternFormat {
        /// Path involved, when known
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered pattern image
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
}

impl fmt::Display for EscherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCombination { combination } => {
                write!(
                    f,
                    "Combination {combination:?} does not result in a valid pattern"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NodeNotFound { index } => {
                write!(f, "Node {index} does not exist in this shape")
            }
            Self::NoMovableNodes => {
                write!(f, "Shape has no movable nodes")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::PatternFormat { path, source } => {
                write!(
                    f,
                    "Failed to read or write pattern '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for EscherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PatternFormat { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EscherError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EscherError {
    EscherError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> EscherError {
    EscherError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
