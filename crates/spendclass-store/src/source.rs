//! The category source contract.

use spendclass_core::Category;

use crate::StoreError;

/// Anything that can supply the set of known categories.
///
/// Implementations return the full set unconditionally; an empty set is not
/// an error. Failure to reach the underlying source, or a malformed query,
/// is a [`StoreError`] and is fatal for the calling inference.
pub trait CategorySource {
    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}
