//! Candidate label construction and the reverse map back to category ids.

use std::collections::HashMap;

use spendclass_core::{CandidateLabel, Category, CategoryId};

use crate::InferenceError;

/// Separator between a category's label and description in candidate text.
const SEPARATOR: &str = ", ";

/// The candidate labels for one inference call, plus the reverse map that
/// recovers category ids from classifier output independent of the order the
/// classifier returns them in.
#[derive(Debug)]
pub struct CandidateSet {
    candidates: Vec<CandidateLabel>,
    by_text: HashMap<String, CategoryId>,
}

impl CandidateSet {
    /// Build one candidate per category.
    ///
    /// Candidate text is `"{label}, {description}"`, deterministic per
    /// category. Two distinct categories producing identical text are
    /// rejected with [`InferenceError::DuplicateLabel`] naming both ids — a
    /// map keyed by text that silently kept the last writer would lose an id
    /// and break the id/label bijection.
    pub fn build(categories: &[Category]) -> Result<Self, InferenceError> {
        let mut candidates = Vec::with_capacity(categories.len());
        let mut by_text: HashMap<String, CategoryId> = HashMap::with_capacity(categories.len());

        for category in categories {
            let text = candidate_text(category);
            if let Some(&first) = by_text.get(&text) {
                return Err(InferenceError::DuplicateLabel {
                    text,
                    first,
                    second: category.id,
                });
            }
            by_text.insert(text.clone(), category.id);
            candidates.push(CandidateLabel {
                text,
                category_id: category.id,
            });
        }

        Ok(Self {
            candidates,
            by_text,
        })
    }

    /// Candidate texts in construction order, ready for the engine request.
    pub fn texts(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Recover the category id for a returned label text. O(1) expected.
    pub fn resolve(&self, text: &str) -> Option<CategoryId> {
        self.by_text.get(text).copied()
    }
}

/// Classifier-facing text for a category.
fn candidate_text(category: &Category) -> String {
    format!("{}{SEPARATOR}{}", category.label, category.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_candidate_per_category() {
        let categories = vec![
            Category::new(1, "Dining", "restaurants"),
            Category::new(2, "Travel", "flights/hotels"),
        ];

        let set = CandidateSet::build(&categories).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.texts(),
            vec!["Dining, restaurants", "Travel, flights/hotels"]
        );
    }

    #[test]
    fn resolve_recovers_ids_regardless_of_order() {
        let categories = vec![
            Category::new(7, "Groceries", "supermarkets"),
            Category::new(3, "Rent", "monthly housing"),
        ];

        let set = CandidateSet::build(&categories).unwrap();
        assert_eq!(set.resolve("Rent, monthly housing"), Some(3));
        assert_eq!(set.resolve("Groceries, supermarkets"), Some(7));
        assert_eq!(set.resolve("Utilities, power and water"), None);
    }

    #[test]
    fn identical_label_and_description_is_rejected() {
        let categories = vec![
            Category::new(1, "Dining", "restaurants"),
            Category::new(2, "Dining", "restaurants"),
        ];

        match CandidateSet::build(&categories) {
            Err(InferenceError::DuplicateLabel {
                text,
                first,
                second,
            }) => {
                assert_eq!(text, "Dining, restaurants");
                assert_eq!(first, 1);
                assert_eq!(second, 2);
            }
            other => panic!("expected DuplicateLabel, got {other:?}"),
        }
    }

    #[test]
    fn empty_category_set_builds_empty_candidates() {
        let set = CandidateSet::build(&[]).unwrap();
        assert!(set.is_empty());
        assert!(set.texts().is_empty());
    }
}
