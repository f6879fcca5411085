use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not found: {0}")]
    DatabaseNotFound(std::path::PathBuf),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
