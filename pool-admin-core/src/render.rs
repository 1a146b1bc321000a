//! Declarative table render model
//!
//! The list controller hands the visible slice to [`render_table`]; front
//! ends draw whatever comes out and never query the store themselves.

use serde::Serialize;

use crate::pagination::PageWindow;
use crate::types::{Record, StatusTone};

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub id: String,
    pub cells: Vec<String>,
    pub tone: Option<StatusTone>,
}

/// "Showing {from} to {to} of {total}" plus the page label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
    pub page_label: String,
}

impl PageSummary {
    pub fn from_window(window: &PageWindow) -> Self {
        let (from, to) = if window.is_empty() {
            (0, 0)
        } else {
            (window.start + 1, window.end)
        };
        Self {
            from,
            to,
            total: window.total,
            page_label: format!("Page {}", window.page),
        }
    }
}

/// Everything a front end needs to draw one list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub rows: Vec<RowModel>,
    pub summary: PageSummary,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Show the "no results" placeholder instead of rows
    pub empty: bool,
}

pub fn render_row<R: Record>(record: &R) -> RowModel {
    RowModel {
        id: record.id().to_string(),
        cells: record.cells(),
        tone: record.tone(),
    }
}

/// Project the current page of a filtered result set.
///
/// `filtered` holds indices into `records`, as returned by
/// [`crate::filter::apply`].
pub fn render_table<R: Record>(records: &[R], filtered: &[usize], window: &PageWindow) -> TableModel {
    let rows: Vec<RowModel> = filtered
        .get(window.range())
        .unwrap_or_default()
        .iter()
        .filter_map(|&index| records.get(index))
        .map(render_row)
        .collect();

    let empty = rows.is_empty();
    TableModel {
        rows,
        summary: PageSummary::from_window(window),
        prev_enabled: !empty && window.has_prev,
        next_enabled: !empty && window.has_next,
        empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use crate::types::{User, UserStatus};

    fn users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                username: format!("user{i}"),
                email: format!("user{i}@example.com"),
                name: format!("User {i}"),
                status: if i % 3 == 0 {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
                created: "2024-01-01".into(),
                last_sign_in: "-".into(),
            })
            .collect()
    }

    #[test]
    fn summary_for_second_page() {
        let records = users(15);
        let filtered: Vec<usize> = (0..15).collect();
        let mut pagination = Pagination::new();
        pagination.next(15);
        let model = render_table(&records, &filtered, &pagination.window(15));

        assert_eq!(model.rows.len(), 5);
        assert_eq!(model.rows[0].id, "user10");
        assert_eq!(
            model.summary,
            PageSummary {
                from: 11,
                to: 15,
                total: 15,
                page_label: "Page 2".into()
            }
        );
        assert!(model.prev_enabled);
        assert!(!model.next_enabled);
    }

    #[test]
    fn tones_follow_status() {
        let records = users(2);
        let model = render_table(&records, &[0, 1], &Pagination::new().window(2));
        assert_eq!(model.rows[0].tone, Some(StatusTone::Muted));
        assert_eq!(model.rows[1].tone, Some(StatusTone::Positive));
    }

    #[test]
    fn zero_rows_raise_empty_state() {
        let records = users(3);
        let model = render_table(&records, &[], &Pagination::new().window(0));
        assert!(model.empty);
        assert!(model.rows.is_empty());
        assert!(!model.prev_enabled && !model.next_enabled);
        assert_eq!((model.summary.from, model.summary.to), (0, 0));
        assert_eq!(model.summary.page_label, "Page 1");
    }
}
