//! Dashboard system card

use serde::{Deserialize, Serialize};

use super::Record;

/// A system tile on the dashboard, filtered by title and category badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCard {
    pub title: String,
    pub category: String,
    pub description: String,
}

impl Record for SystemCard {
    fn id(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.clone(),
            self.description.clone(),
        ]
    }
}
