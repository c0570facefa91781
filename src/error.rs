//! Error types for the Time-and-Wage Accounting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself is infallible (malformed numeric input is
//! coerced to zero, division-by-zero sites have guarded defaults); errors
//! only arise at the collaborator seams: configuration files, the persistent
//! store, and the HTTP surface.

use thiserror::Error;

/// The main error type for the Time-and-Wage Accounting Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wagebook::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A collection could not be read from the persistent store.
    #[error("Failed to read collection '{collection}' for owner '{owner}': {message}")]
    StoreReadError {
        /// The owner key whose data was requested.
        owner: String,
        /// The collection name that failed to load.
        collection: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A collection could not be written to the persistent store.
    #[error("Failed to write collection '{collection}' for owner '{owner}': {message}")]
    StoreWriteError {
        /// The owner key whose data was being written.
        owner: String,
        /// The collection name that failed to save.
        collection: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// Record data could not be serialized or deserialized.
    #[error("Failed to convert record data: {message}")]
    SerializationError {
        /// A description of the serde failure.
        message: String,
    },

    /// No work record exists with the given identifier.
    #[error("Work record not found: {id}")]
    RecordNotFound {
        /// The record identifier that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
