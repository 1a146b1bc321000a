//! Form submission target abstract Trait

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ConsoleResult;

/// What a submitted payload asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    CreateUser,
    CreateAppClient,
    UpdateAppClient,
    DeleteAppClient,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateUser => "create_user",
            Self::CreateAppClient => "create_app_client",
            Self::UpdateAppClient => "update_app_client",
            Self::DeleteAppClient => "delete_app_client",
        }
    }
}

/// Receiver of form payloads
///
/// A submit is committed to the local store only after `submit` returns
/// `Ok`.
///
/// Implementations:
/// - `LoggingSubmissionSink`: logs the payload
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a payload
    ///
    /// # Arguments
    /// * `kind` - Requested operation
    /// * `payload` - JSON body of the request
    async fn submit(&self, kind: SubmissionKind, payload: serde_json::Value) -> ConsoleResult<()>;
}
