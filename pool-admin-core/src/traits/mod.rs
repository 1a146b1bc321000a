//! Data source and submission target abstraction trait definition

mod record_source;
mod submission_sink;

pub use record_source::RecordSource;
pub use submission_sink::{SubmissionKind, SubmissionSink};
