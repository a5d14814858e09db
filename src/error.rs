//! Error types for snaptrie

use thiserror::Error;

/// Result type alias for snaptrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in snaptrie operations
///
/// Key absence and value-type mismatch are not errors; lookups report
/// both as `None`. Only operations whose arguments can be outright
/// invalid (such as naming a snapshot that was never created) fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("version not found: {requested} (latest is {latest})")]
    VersionNotFound { requested: usize, latest: usize },
}
