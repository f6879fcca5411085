//! Storage layer: the category source contract and its SQLite implementation.

mod error;
pub use error::StoreError;

mod source;
pub use source::CategorySource;

mod sqlite;
pub use sqlite::SqliteStore;
