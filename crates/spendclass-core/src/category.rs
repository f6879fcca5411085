//! Budget categories as configured in the data source.

use serde::{Deserialize, Serialize};

/// Stable category identifier (SQLite integer primary key).
pub type CategoryId = i64;

/// A budget category.
///
/// Immutable once loaded for a given inference call; the set of categories
/// is owned entirely by the category store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Short name, e.g. "Dining".
    pub label: String,
    /// Free-text description, e.g. "restaurants".
    pub description: String,
}

impl Category {
    pub fn new(id: CategoryId, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
        }
    }
}
