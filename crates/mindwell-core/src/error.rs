//! Core error types for mindwell-core.
//!
//! This module defines the error hierarchy using thiserror. Load-time
//! data-shape problems (malformed assessment definitions) are fatal and
//! surface as [`AssessmentError`]; everything a user can recover from
//! (incomplete answers, network failures) has its own variant.

use thiserror::Error;

/// Core error type for mindwell-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed assessment definition (fatal at load time)
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Scoring precondition failure (recoverable, caller re-prompts)
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Sync-related errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Local store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Gamification backend errors
    #[error("Gamification error: {0}")]
    Gamification(#[from] GamificationError),

    /// Photo analysis errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load-time validation failures for assessment definitions.
///
/// These indicate a content/deployment bug, not user error. Definitions
/// are validated when loaded and rejected before any scoring can happen.
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Assessment has no questions
    #[error("Assessment '{0}' has no questions")]
    NoQuestions(String),

    /// Assessment has no answer options
    #[error("Assessment '{0}' has no answer options")]
    NoOptions(String),

    /// Two questions share the same ID
    #[error("Assessment '{assessment}' has duplicate question id '{question}'")]
    DuplicateQuestion { assessment: String, question: String },

    /// Interpretation bands missing for a scored assessment
    #[error("Assessment '{0}' has no interpretation bands")]
    NoInterpretations(String),

    /// Interpretation bands are not strictly ascending by `max`
    #[error(
        "Assessment '{assessment}' has non-monotonic interpretation bands: \
         max {prev} followed by max {next}"
    )]
    NonMonotonicBands {
        assessment: String,
        prev: u32,
        next: u32,
    },

    /// Top interpretation band does not cover the maximum score
    #[error(
        "Assessment '{assessment}' interpretation bands end at {top} but max score is {max_score}"
    )]
    BandsNotExhaustive {
        assessment: String,
        top: u32,
        max_score: u32,
    },

    /// Typology/multidimensional question without a dimension
    #[error("Question '{question}' in '{assessment}' is missing a dimension")]
    MissingDimension { assessment: String, question: String },

    /// Question references a dimension the assessment does not declare
    #[error("Question '{question}' in '{assessment}' references undeclared dimension '{dimension}'")]
    UnknownDimension {
        assessment: String,
        question: String,
        dimension: String,
    },

    /// Knowledge question without a correct answer
    #[error("Question '{question}' in '{assessment}' is missing a correct answer")]
    MissingCorrectAnswer { assessment: String, question: String },

    /// Dimension code is not a recognized typology axis
    #[error("Question '{question}' in '{assessment}' has invalid axis code '{code}'")]
    InvalidAxis {
        assessment: String,
        question: String,
        code: String,
    },
}

/// Scoring precondition failures.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Answer set does not cover every question
    #[error("Incomplete answers: {got} of {expected} questions answered")]
    IncompleteAnswers { expected: usize, got: usize },

    /// Answer references a question not in the assessment
    #[error("Answer references unknown question '{0}'")]
    UnknownQuestion(String),

    /// Projective response count does not match the card count
    #[error("Expected {expected} projective responses, got {got}")]
    ResponseCountMismatch { expected: usize, got: usize },

    /// The assessment kind requires a different scoring entry point
    #[error("Assessment '{0}' is projective; use score_projective")]
    ProjectiveInput(String),
}

/// Sync error types.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Another sync is already in flight for this reconciler
    #[error("Sync in progress")]
    InProgress,

    /// Remote rejected the request with a server-reported reason
    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// Network-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local store failure during sync
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Local store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Stored blob could not be decoded
    #[error("Corrupt blob under key '{key}': {message}")]
    CorruptBlob { key: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Gamification backend errors.
#[derive(Debug, Error)]
pub enum GamificationError {
    /// Network-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Device identity could not be read or created
    #[error("Device ID error: {0}")]
    DeviceId(#[from] DeviceIdError),
}

/// Device identity errors.
#[derive(Debug, Error)]
pub enum DeviceIdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid device ID format: {0}")]
    InvalidFormat(String),
}

/// Photo analysis errors.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No network connectivity
    #[error("No network connection")]
    Offline,

    /// The analysis call exceeded its deadline and was aborted
    #[error("Analysis timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// Remote returned a non-success status
    #[error("Analysis service error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// Response body was not the expected shape
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed {
        path: std::path::PathBuf,
        message: String,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
