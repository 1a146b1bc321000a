//! Built-in sample dataset, plus the source and sink that serve it

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::traits::{RecordSource, SubmissionKind, SubmissionSink};
use crate::types::{AppClient, ClientType, SystemCard, User, UserStatus, DEFAULT_FLOW};

/// Payload keys whose values never reach the log
const REDACTED_KEYS: &[&str] = &["temp_password", "clientSecret"];

fn user(username: &str, name: &str, status: UserStatus, created: &str, last_sign_in: &str) -> User {
    User {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        name: name.to_string(),
        status,
        created: created.to_string(),
        last_sign_in: last_sign_in.to_string(),
    }
}

/// Fifteen users, five of them inactive
pub fn users() -> Vec<User> {
    use UserStatus::{Active, Inactive};
    vec![
        user("john.doe", "John Doe", Active, "2024-01-15", "2024-11-02"),
        user("jane.smith", "Jane Smith", Active, "2024-02-20", "2024-11-01"),
        user("bob.wilson", "Bob Wilson", Inactive, "2024-03-10", "2024-10-15"),
        user("alice.johnson", "Alice Johnson", Active, "2024-04-05", "2024-11-03"),
        user("charlie.brown", "Charlie Brown", Active, "2024-05-12", "2024-10-28"),
        user("diana.prince", "Diana Prince", Active, "2024-06-08", "2024-11-02"),
        user("evan.davis", "Evan Davis", Inactive, "2024-07-14", "2024-10-25"),
        user("fiona.garcia", "Fiona Garcia", Inactive, "2024-08-22", "2024-09-30"),
        user("george.miller", "George Miller", Active, "2024-09-03", "2024-11-01"),
        user("hannah.lee", "Hannah Lee", Active, "2024-10-11", "2024-11-03"),
        user("isaac.thomas", "Isaac Thomas", Active, "2024-10-18", "2024-10-30"),
        user("julia.martinez", "Julia Martinez", Inactive, "2024-10-25", "2024-10-20"),
        user("kevin.anderson", "Kevin Anderson", Active, "2024-11-01", "2024-11-03"),
        user("laura.taylor", "Laura Taylor", Inactive, "2024-11-02", "2024-11-02"),
        user("michael.white", "Michael White", Active, "2024-11-03", "2024-11-03"),
    ]
}

pub fn app_clients() -> Vec<AppClient> {
    vec![AppClient {
        name: "Admission System".to_string(),
        client_id: "as-ewfc2mewf".to_string(),
        client_type: ClientType::Confidential,
        flows: DEFAULT_FLOW.to_string(),
        created: "2024-06-22".to_string(),
        last_used: "2024-10-28".to_string(),
        callbacks: "puptas.com".to_string(),
        logouts: String::new(),
        scopes: "openid profile".to_string(),
    }]
}

pub fn system_cards() -> Vec<SystemCard> {
    [
        ("Admission System", "Academic", "Applicant registration, testing and admission results."),
        ("Student Information System", "Academic", "Enrollment, schedules and student records."),
        ("Grading System", "Academic", "Faculty grade encoding and student grade viewing."),
        ("Library System", "Services", "Catalogue search, borrowing and returns."),
        ("Scholarship Portal", "Services", "Scholarship applications and grant tracking."),
        ("Document Request System", "Administrative", "Requests for transcripts and certifications."),
        ("Human Resource Information System", "Administrative", "Personnel records, leave and payroll."),
    ]
    .into_iter()
    .map(|(title, category, description)| SystemCard {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Record source backed by the built-in sample dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecordSource;

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn users(&self) -> ConsoleResult<Vec<User>> {
        Ok(users())
    }

    async fn app_clients(&self) -> ConsoleResult<Vec<AppClient>> {
        Ok(app_clients())
    }

    async fn system_cards(&self) -> ConsoleResult<Vec<SystemCard>> {
        Ok(system_cards())
    }
}

/// Submission sink that only logs the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionSink;

/// Copy of `payload` with secret values masked
pub fn redact(payload: &serde_json::Value) -> serde_json::Value {
    match payload {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = if REDACTED_KEYS.contains(&key.as_str()) {
                        match value.as_str() {
                            Some("") => value.clone(),
                            _ => serde_json::Value::String("********".to_string()),
                        }
                    } else {
                        redact(value)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(redact).collect())
        }
        other => other.clone(),
    }
}

#[async_trait]
impl SubmissionSink for LoggingSubmissionSink {
    async fn submit(&self, kind: SubmissionKind, payload: serde_json::Value) -> ConsoleResult<()> {
        let body = serde_json::to_string(&redact(&payload))?;
        log::info!("Submission {}: {body}", kind.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use serde_json::json;

    #[test]
    fn sample_users_are_unique_with_five_inactive() {
        let users = users();
        assert_eq!(users.len(), 15);
        assert_eq!(
            users.iter().filter(|u| u.status == UserStatus::Inactive).count(),
            5
        );
        assert!(RecordStore::new(users).is_ok());
    }

    #[test]
    fn sample_cards_are_unique() {
        assert!(RecordStore::new(system_cards()).is_ok());
    }

    #[test]
    fn redact_masks_nested_secrets() {
        let payload = json!({
            "email": "a@example.com",
            "temp_password": "Secret#123",
            "nested": [{ "clientSecret": "abc" }],
        });
        let redacted = redact(&payload);
        assert_eq!(redacted["email"], "a@example.com");
        assert_eq!(redacted["temp_password"], "********");
        assert_eq!(redacted["nested"][0]["clientSecret"], "********");
    }

    #[test]
    fn redact_keeps_empty_password_empty() {
        let redacted = redact(&json!({ "temp_password": "" }));
        assert_eq!(redacted["temp_password"], "");
    }

    #[tokio::test]
    async fn static_source_serves_sample() {
        let source = StaticRecordSource;
        assert_eq!(source.users().await.unwrap().len(), 15);
        assert_eq!(
            source.app_clients().await.unwrap()[0].client_id,
            "as-ewfc2mewf"
        );
    }

    #[tokio::test]
    async fn logging_sink_accepts_payload() {
        let sink = LoggingSubmissionSink;
        let result = sink
            .submit(SubmissionKind::CreateUser, json!({ "email": "a@example.com" }))
            .await;
        assert!(result.is_ok());
    }
}
