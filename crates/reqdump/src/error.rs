//! Error type for dump assembly.

use thiserror::Error;

/// Error type for configuration loading and dump assembly.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The configuration text could not be parsed.
    #[error("invalid dump configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A section table could not be built (zero chunk limit or an
    /// undescribable attribute value).
    #[error(transparent)]
    Table(#[from] reqdump_render::TableError),
}
