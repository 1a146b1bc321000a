//! Filter predicate
//!
//! A record passes when the query is empty or any searchable field
//! contains it (case-insensitively), and the category is unset or equal.

use crate::types::Record;

/// How the category filter compares values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryMatch {
    /// Byte-for-byte equality (user status filter)
    #[default]
    Exact,
    /// Equality after lowercasing both sides (system card badges)
    IgnoreCase,
}

impl CategoryMatch {
    /// Whether two category values count as the same
    pub fn same(self, left: &str, right: &str) -> bool {
        match self {
            Self::Exact => left == right,
            Self::IgnoreCase => left.to_lowercase() == right.to_lowercase(),
        }
    }
}

/// Current search query and category filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    category: Option<String>,
}

impl FilterState {
    pub fn new(query: &str, category: Option<&str>) -> Self {
        let mut state = Self::default();
        state.set_query(query);
        state.set_category(category);
        state
    }

    /// Lowercased search query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    /// An empty category means "no filter"
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category.filter(|c| !c.is_empty()).map(str::to_string);
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_some()
    }

    pub fn matches<R: Record>(&self, record: &R, mode: CategoryMatch) -> bool {
        let matches_query = self.query.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query));

        let matches_category = match (&self.category, record.category()) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => mode.same(actual, wanted),
            (Some(_), None) => false,
        };

        matches_query && matches_category
    }
}

/// Indices of the records that pass the filter, in store order
pub fn apply<R: Record>(records: &[R], filter: &FilterState, mode: CategoryMatch) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(*record, mode))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SystemCard;

    fn cards() -> Vec<SystemCard> {
        [
            ("Admission System", "Academic"),
            ("Library Portal", "Services"),
            ("Grading System", "Academic"),
        ]
        .into_iter()
        .map(|(title, category)| SystemCard {
            title: title.into(),
            category: category.into(),
            description: String::new(),
        })
        .collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = FilterState::default();
        assert_eq!(apply(&cards(), &filter, CategoryMatch::Exact), vec![0, 1, 2]);
        assert!(!filter.is_active());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let filter = FilterState::new("SYSTEM", None);
        assert_eq!(filter.query(), "system");
        assert_eq!(apply(&cards(), &filter, CategoryMatch::Exact), vec![0, 2]);
    }

    #[test]
    fn category_mode_controls_case() {
        let filter = FilterState::new("", Some("academic"));
        assert!(apply(&cards(), &filter, CategoryMatch::Exact).is_empty());
        assert_eq!(
            apply(&cards(), &filter, CategoryMatch::IgnoreCase),
            vec![0, 2]
        );
    }

    #[test]
    fn empty_category_means_no_filter() {
        let filter = FilterState::new("", Some(""));
        assert_eq!(filter.category(), None);
    }

    #[test]
    fn query_and_category_combine() {
        let filter = FilterState::new("grading", Some("Academic"));
        assert_eq!(apply(&cards(), &filter, CategoryMatch::Exact), vec![2]);
    }
}
