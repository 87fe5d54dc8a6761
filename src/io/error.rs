//! Error types for template loading and level generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Template resource does not follow the fixed-size block grammar
    MalformedTemplate {
        /// 1-based index of the fragment being read
        block: usize,
        /// 1-based source line where the problem was detected
        line: usize,
        /// Description of what's wrong with the block
        reason: String,
    },

    /// Attempt ceiling reached before a valid level was produced
    ///
    /// Occurs when every attempt either:
    /// - Found no compatible fragment at some lattice anchor
    /// - Produced a grid rejected by structural validation
    GenerationExhausted {
        /// 0-based index of the level being generated
        level: usize,
        /// Attempts made for that level
        attempts: usize,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a level image to disk
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

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTemplate {
                block,
                line,
                reason,
            } => {
                write!(f, "Malformed template {block} at line {line}: {reason}")
            }
            Self::GenerationExhausted { level, attempts } => {
                write!(
                    f,
                    "Level {level} could not be generated after {attempts} attempts"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl From<std::io::Error> for GeneratorError {
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
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed template error
pub fn malformed_template(block: usize, line: usize, reason: &impl ToString) -> GeneratorError {
    GeneratorError::MalformedTemplate {
        block,
        line,
        reason: reason.to_string(),
    }
}
