//! Error type for store operations.

/// Errors that can occur while querying the forum database.
///
/// A query matching zero rows is never an error: single-row finders
/// return `Option` and collection finders return an empty `Vec`. This
/// type covers genuine failures only (malformed SQL, a schema/record
/// mismatch at decode time, or an unusable connection).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database operation failed.
    #[error("forum database error: {0}")]
    Database(#[from] rusqlite::Error),
}
