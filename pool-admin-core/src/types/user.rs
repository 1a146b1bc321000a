//! User pool member

use serde::{Deserialize, Serialize};

use super::{Record, StatusTone};

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Status as shown in the table and compared by the status filter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// All statuses, in filter-dropdown order
    pub fn all() -> &'static [UserStatus] {
        &[UserStatus::Active, UserStatus::Inactive]
    }
}

/// User
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub name: String,
    pub status: UserStatus,
    pub created: String,
    pub last_sign_in: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.username
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.email, &self.name]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.email.clone(),
            self.name.clone(),
            self.status.as_str().to_string(),
            self.created.clone(),
            self.last_sign_in.clone(),
        ]
    }

    fn tone(&self) -> Option<StatusTone> {
        Some(StatusTone::from_status(self.status.as_str()))
    }
}
