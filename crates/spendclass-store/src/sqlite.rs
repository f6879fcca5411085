//! SQLite-backed category store.

use std::path::PathBuf;

use rusqlite::{Connection, params};
use tracing::debug;

use spendclass_core::{Category, CategoryId};

use crate::{CategorySource, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    label TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT ''
);
"#;

/// SQLite-backed category store.
///
/// Holds only the database path: every operation opens its own connection,
/// uses it, and releases it before returning. A connection is never held
/// across calls, so one store value can serve any number of sequential
/// inference calls.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the categories table if it does not exist yet.
    ///
    /// Creates the database file as a side effect when missing.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert a category, or update its description when the label already
    /// exists. Returns the row id either way.
    pub fn upsert_category(
        &self,
        label: &str,
        description: &str,
    ) -> Result<CategoryId, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT INTO categories (label, description) VALUES (?1, ?2)
             ON CONFLICT(label) DO UPDATE SET description = excluded.description",
            params![label, description],
        )?;
        let id: CategoryId = conn.query_row(
            "SELECT id FROM categories WHERE label = ?1",
            params![label],
            |row| row.get(0),
        )?;
        debug!(id, label, "upserted category");
        Ok(id)
    }

    fn open(&self) -> Result<Connection, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::DatabaseNotFound(self.path.clone()));
        }
        Ok(Connection::open(&self.path)?)
    }
}

impl CategorySource for SqliteStore {
    /// List every configured category.
    ///
    /// The selection is unconditional — all rows participate in every
    /// inference call. An empty table yields `Ok(vec![])`, not an error.
    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT id, label, description FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                label: row.get(1)?,
                description: row.get(2)?,
            })
        })?;
        let categories = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(count = categories.len(), "listed categories");
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(dir: &tempfile::TempDir) -> SqliteStore {
        SqliteStore::new(dir.path().join("budget.db"))
    }

    #[test]
    fn list_without_database_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        match store.list_categories() {
            Err(StoreError::DatabaseNotFound(path)) => {
                assert!(path.ends_with("budget.db"));
            }
            other => panic!("expected DatabaseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_lists_no_categories() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_schema().unwrap();
        assert!(store.list_categories().unwrap().is_empty());
    }

    #[test]
    fn upsert_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let dining = store.upsert_category("Dining", "restaurants").unwrap();
        let travel = store.upsert_category("Travel", "flights/hotels").unwrap();
        assert_ne!(dining, travel);

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], Category::new(dining, "Dining", "restaurants"));
        assert_eq!(
            categories[1],
            Category::new(travel, "Travel", "flights/hotels")
        );
    }

    #[test]
    fn upsert_existing_label_updates_description() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let first = store.upsert_category("Dining", "restaurants").unwrap();
        let second = store.upsert_category("Dining", "restaurants and bars").unwrap();
        assert_eq!(first, second);

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].description, "restaurants and bars");
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert!(store.list_categories().unwrap().is_empty());
    }
}
