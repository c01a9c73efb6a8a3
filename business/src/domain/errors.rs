/// Repository errors for domain layer.
///
/// `NotFound` is the datastore's "no row matched" signal. Every other failure
/// keeps the driver message so callers can surface it for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database_error(message: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(message.into())
    }
}
