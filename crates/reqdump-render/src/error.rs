//! Error types for table construction.
//!
//! Rendering itself is infallible: once a table exists, producing the text
//! block cannot fail. The only contract checks happen while a table is being
//! built, so this is where the error surface lives.

use thiserror::Error;

/// Error type for table construction.
#[derive(Debug, Error)]
pub enum TableError {
    /// The chunk limit must allow at least one character per wrapped line.
    #[error("chunk limit must be at least 1, got {0}")]
    InvalidChunkLimit(usize),

    /// A dynamic value could not be converted into a describable form.
    #[error("value for {name:?} cannot be described")]
    Describe {
        /// Name of the entry whose value failed to convert.
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
