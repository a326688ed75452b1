//! Error types for configuration intake, session lifecycle and preview export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all calibration operations
#[derive(Debug)]
pub enum CalibrationError {
    /// A configuration field failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// `columns × rows` exceeds the allocation cap
    GridTooLarge {
        /// Requested column count
        columns: u32,
        /// Requested row count
        rows: u32,
        /// Largest accepted cell count
        max_cells: usize,
    },

    /// Mode index outside the catalogue
    UnknownMode {
        /// The rejected index
        index: usize,
        /// Number of modes in the catalogue
        mode_count: usize,
    },

    /// Operation requires an idle session
    ///
    /// Occurs when configuration is edited, or a start is requested,
    /// while a run is active or paused.
    SessionActive {
        /// Operation that was rejected
        operation: &'static str,
    },

    /// The periodic tick source could not be armed
    TickSource {
        /// Operation being performed (start, resume)
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Export requested but no frames were recorded
    NothingCaptured,

    /// Failed to encode the animated preview
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

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GridTooLarge {
                columns,
                rows,
                max_cells,
            } => {
                write!(
                    f,
                    "Total cells is too large: {columns} x {rows} exceeds {max_cells}. \
                     Try smaller values (typical is 96 or 300)"
                )
            }
            Self::UnknownMode { index, mode_count } => {
                write!(
                    f,
                    "Mode index {index} is out of range (expected 0..{mode_count})"
                )
            }
            Self::SessionActive { operation } => {
                write!(f, "Cannot {operation} while a calibration run is active")
            }
            Self::TickSource { operation, reason } => {
                write!(f, "Failed to {operation} timer: {reason}")
            }
            Self::NothingCaptured => {
                write!(f, "No frames were captured for the preview")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
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

impl std::error::Error for CalibrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CalibrationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for calibration results
pub type Result<T> = std::result::Result<T, CalibrationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CalibrationError {
    CalibrationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tick source failure
pub fn tick_source_error(operation: &'static str, reason: &impl ToString) -> CalibrationError {
    CalibrationError::TickSource {
        operation,
        reason: reason.to_string(),
    }
}
