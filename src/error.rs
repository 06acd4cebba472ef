use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// No token table is published for the requested language code.
    #[error("no token table for language '{0}'")]
    NotFound(String),

    /// A resource exists for the language but is not a valid token table.
    #[error("malformed token table for language '{language}': {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// A group or table violates an authoring invariant.
    #[error("invalid token table: {0}")]
    Invalid(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
