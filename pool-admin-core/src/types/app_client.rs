//! App client registered against the user pool

use serde::{Deserialize, Serialize};

use super::Record;

/// OAuth flow every app client uses
pub const DEFAULT_FLOW: &str = "code";

/// App client type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientType {
    #[default]
    Confidential,
}

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confidential => "Confidential",
        }
    }
}

/// OAuth scope offered by the app client form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Openid,
    Email,
    Phone,
    Profile,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Openid => "openid",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Profile => "profile",
        }
    }

    /// All scopes, in checkbox order
    pub fn all() -> &'static [Scope] {
        &[Scope::Openid, Scope::Email, Scope::Phone, Scope::Profile]
    }

    /// Parse a stored scope string; unknown tokens are ignored
    pub fn parse_list(raw: &str) -> Vec<Scope> {
        raw.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .filter_map(|token| Self::all().iter().copied().find(|s| s.as_str() == token))
            .collect()
    }

    /// Join scopes with single spaces, in checkbox order
    pub fn join(scopes: &[Scope]) -> String {
        Self::all()
            .iter()
            .filter(|s| scopes.contains(s))
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// App client
///
/// The client secret is never stored here: it is handed out once at
/// creation time and cannot be read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppClient {
    pub name: String,
    pub client_id: String,
    pub client_type: ClientType,
    pub flows: String,
    pub created: String,
    pub last_used: String,
    pub callbacks: String,
    pub logouts: String,
    pub scopes: String,
}

impl Record for AppClient {
    fn id(&self) -> &str {
        &self.client_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.client_id]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.client_id.clone(),
            self.created.clone(),
            self.last_used.clone(),
        ]
    }
}
