//! Error types for canvas, patch and scheduler operations plus the I/O wrappers

use std::fmt;
use std::path::PathBuf;

use crate::spatial::position::Position;

/// Main error type for all assembly operations
#[derive(Debug)]
pub enum AssemblyError {
    /// Position lies outside `[0, width) x [0, height)`
    OutOfBounds {
        /// Offending position
        position: Position,
        /// Canvas dimensions (width, height)
        size: (usize, usize),
    },

    /// Insertion targeted a position that already holds a patch
    ///
    /// Placement is permanent, so the canvas refuses to overwrite.
    AlreadyFilled {
        /// Offending position
        position: Position,
    },

    /// Orientation value outside the four quarter turns
    InvalidOrientation {
        /// Raw value that failed to convert
        value: String,
    },

    /// A step was requested with no patches left in the queue
    QueueEmpty {
        /// Number of steps completed before the request
        step: usize,
    },

    /// The frontier is exhausted while patches are still waiting
    ///
    /// The canvas has no legal position left for the next patch. This is
    /// fatal for the current run.
    CapacityExceeded {
        /// Number of steps completed before the failure
        step: usize,
        /// Patches still waiting in the queue
        remaining: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an assembled image to disk
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

    /// Source data doesn't meet assembly requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
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

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { position, size } => {
                write!(
                    f,
                    "Position {position} is outside the {}x{} canvas",
                    size.0, size.1
                )
            }
            Self::AlreadyFilled { position } => {
                write!(f, "Position {position} already holds a patch")
            }
            Self::InvalidOrientation { value } => {
                write!(f, "Invalid orientation '{value}'")
            }
            Self::QueueEmpty { step } => {
                write!(f, "No patches left to place at step {step}")
            }
            Self::CapacityExceeded { step, remaining } => {
                write!(
                    f,
                    "Canvas is full at step {step} with {remaining} patches still queued"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for assembly results
pub type Result<T> = std::result::Result<T, AssemblyError>;

impl From<image::ImageError> for AssemblyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AssemblyError {
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
) -> AssemblyError {
    AssemblyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AssemblyError {
    AssemblyError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
