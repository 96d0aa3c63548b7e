/*!
 * Error types for the titlovi library and CLI.
 *
 * Data-quality problems (noisy timing, unparsable subtitle blocks, empty
 * input) never surface here: they are recovered where they occur. Only
 * caller misuse, such as impossible layout budgets or invalid manual edits,
 * becomes an error.
 */

use thiserror::Error;

/// Errors raised by the caption pipeline and its surrounding services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptionError {
    /// A layout budget with a zero line width or line count
    #[error("Invalid layout: max_chars_per_line={max_chars_per_line}, max_lines={max_lines} (both must be > 0)")]
    InvalidLayout {
        /// Requested characters per line
        max_chars_per_line: usize,
        /// Requested lines per cue
        max_lines: usize,
    },

    /// An aspect-ratio tag that does not name a known layout
    #[error("Unknown aspect ratio: {0}")]
    UnknownAspectRatio(String),

    /// A subtitle format name or extension that is not supported
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),

    /// A configuration value outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cue list that violates the timing or numbering invariants
    #[error("Invalid cue list: {0}")]
    InvalidCues(String),

    /// No project stored under the given id
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

/// Main application error type used by the binary
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while reading or writing configuration or transcription JSON
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the caption pipeline
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
