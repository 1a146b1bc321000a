//! Record type definitions
//!
//! Every list screen works over a concrete record type implementing
//! [`Record`]; the list controller and renderer only see the trait.

mod app_client;
mod system_card;
mod user;

pub use app_client::{AppClient, ClientType, Scope, DEFAULT_FLOW};
pub use system_card::SystemCard;
pub use user::{User, UserStatus};

/// Display tone derived from a record's enumerated status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// `ACTIVE`
    Positive,
    /// `INACTIVE` and anything unrecognised
    Muted,
}

impl StatusTone {
    /// Map a raw status string to its tone
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "ACTIVE" => Self::Positive,
            _ => Self::Muted,
        }
    }
}

/// A single tabular entity
pub trait Record: Clone {
    /// Unique identifier within a store
    fn id(&self) -> &str;

    /// Fields matched against the free-text search query
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the category filter, if the record has one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Cells shown in the table row, in column order
    fn cells(&self) -> Vec<String>;

    /// Status tone for the row badge, if the record carries a status
    fn tone(&self) -> Option<StatusTone> {
        None
    }
}

/// Today's UTC date in the `YYYY-MM-DD` form used by the sample data
pub(crate) fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_maps_to_positive_tone() {
        assert_eq!(StatusTone::from_status("ACTIVE"), StatusTone::Positive);
        assert_eq!(StatusTone::from_status("INACTIVE"), StatusTone::Muted);
        assert_eq!(StatusTone::from_status("SUSPENDED"), StatusTone::Muted);
    }

    #[test]
    fn today_is_iso_date() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert_eq!(&d[4..5], "-");
        assert_eq!(&d[7..8], "-");
        assert_eq!(d, chrono::Utc::now().date_naive().to_string());
    }
}
