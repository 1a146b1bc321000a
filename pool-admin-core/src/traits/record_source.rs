//! Record source abstract Trait

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::types::{AppClient, SystemCard, User};

/// Seed data for the console's record stores
///
/// Implementations:
/// - `StaticRecordSource`: built-in sample dataset
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load all users, in display order
    async fn users(&self) -> ConsoleResult<Vec<User>>;

    /// Load all app clients, newest first
    async fn app_clients(&self) -> ConsoleResult<Vec<AppClient>>;

    /// Load the dashboard system cards
    async fn system_cards(&self) -> ConsoleResult<Vec<SystemCard>>;
}
