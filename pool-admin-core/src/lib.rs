//! Pool Admin Core Library
//!
//! Provides the platform-independent logic behind the admin console:
//! - Record stores for users, app clients and system cards
//! - Filter predicate, paginator and declarative table render models
//! - Modal form controllers (app client create/edit/view, add user)
//! - Credential generation backed by the operating system CSPRNG
//! - Card gallery transitions and shell chrome (sidebar, dropdowns, profile menu)
//!
//! Data loading and form submission are abstracted through traits,
//! so a front end can swap the static sample source for a real backend.

pub mod credentials;
pub mod error;
pub mod filter;
pub mod form;
pub mod gallery;
pub mod list;
pub mod pagination;
pub mod render;
pub mod sample;
pub mod services;
pub mod shell;
pub mod store;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ConsoleError, ConsoleResult};
pub use list::ListController;
pub use pagination::{PageWindow, Pagination, PAGE_SIZE};
pub use render::{PageSummary, RowModel, TableModel};
pub use services::ConsoleService;
pub use store::RecordStore;
pub use traits::{RecordSource, SubmissionSink};
