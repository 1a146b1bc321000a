#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `ConsoleService` with custom sources and sinks.

use std::sync::Arc;

use async_trait::async_trait;
use pool_admin_core::error::{ConsoleError, ConsoleResult};
use pool_admin_core::form::{AddUserForm, AppClientForm, SubmitOutcome};
use pool_admin_core::sample::{self, LoggingSubmissionSink, StaticRecordSource};
use pool_admin_core::traits::{RecordSource, SubmissionKind, SubmissionSink};
use pool_admin_core::types::{AppClient, SystemCard, User};
use pool_admin_core::ConsoleService;
use tokio::sync::Mutex;

// ===== Mock Implementations =====

/// Source whose user list contains a duplicate identifier.
struct DuplicateUserSource;

#[async_trait]
impl RecordSource for DuplicateUserSource {
    async fn users(&self) -> ConsoleResult<Vec<User>> {
        let mut users = sample::users();
        users.push(users[0].clone());
        Ok(users)
    }

    async fn app_clients(&self) -> ConsoleResult<Vec<AppClient>> {
        Ok(Vec::new())
    }

    async fn system_cards(&self) -> ConsoleResult<Vec<SystemCard>> {
        Ok(Vec::new())
    }
}

/// Sink that records every payload kind.
#[derive(Default)]
struct KindRecorder {
    kinds: Mutex<Vec<SubmissionKind>>,
}

#[async_trait]
impl SubmissionSink for KindRecorder {
    async fn submit(&self, kind: SubmissionKind, _payload: serde_json::Value) -> ConsoleResult<()> {
        self.kinds.lock().await.push(kind);
        Ok(())
    }
}

#[tokio::test]
async fn duplicate_seed_is_rejected() {
    let service = ConsoleService::new(Arc::new(DuplicateUserSource), Arc::new(LoggingSubmissionSink));
    let err = service.load_users().await.unwrap_err();
    assert_eq!(err, ConsoleError::DuplicateIdentifier("john.doe".into()));
}

#[tokio::test]
async fn full_client_lifecycle_reaches_sink_in_order() {
    let sink = Arc::new(KindRecorder::default());
    let service = ConsoleService::new(Arc::new(StaticRecordSource), sink.clone());
    let mut clients = service.load_app_clients().await.unwrap();
    let mut form = AppClientForm::default();

    form.open_create().unwrap();
    form.set_name("Registrar").unwrap();
    let SubmitOutcome::Created(issued) = service
        .submit_app_client(&mut form, &mut clients)
        .await
        .unwrap()
    else {
        panic!("expected create outcome");
    };

    form.open_edit(&clients, &issued.client_id).unwrap();
    form.set_callbacks("https://registrar.example.com/callback").unwrap();
    service
        .submit_app_client(&mut form, &mut clients)
        .await
        .unwrap();
    assert_eq!(
        clients.find(&issued.client_id).unwrap().callbacks,
        "https://registrar.example.com/callback"
    );

    let token = form.request_delete(&clients, &issued.client_id).unwrap();
    service
        .delete_app_client(&mut form, &mut clients, &token)
        .await
        .unwrap();

    assert_eq!(clients.store().len(), 1);
    assert_eq!(
        *sink.kinds.lock().await,
        vec![
            SubmissionKind::CreateAppClient,
            SubmissionKind::UpdateAppClient,
            SubmissionKind::DeleteAppClient,
        ]
    );
}

#[tokio::test]
async fn add_user_with_phone_only() {
    let service = ConsoleService::new(Arc::new(StaticRecordSource), Arc::new(LoggingSubmissionSink));
    let mut users = service.load_users().await.unwrap();
    let mut form = AddUserForm {
        phone: "+639171234567".into(),
        given_name: "Maria".into(),
        ..AddUserForm::default()
    };

    let user = service.create_user(&mut form, &mut users).await.unwrap();

    assert_eq!(user.username, "+639171234567");
    assert_eq!(user.email, "-");
    assert_eq!(user.name, "Maria");
    assert_eq!(users.render().rows[0].id, "+639171234567");
}

#[tokio::test]
async fn add_user_validation_message_is_verbatim() {
    let service = ConsoleService::new(Arc::new(StaticRecordSource), Arc::new(LoggingSubmissionSink));
    let mut users = service.load_users().await.unwrap();
    let mut form = AddUserForm::default();

    let err = service.create_user(&mut form, &mut users).await.unwrap_err();
    assert!(err.is_expected());
    assert_eq!(
        err.user_message(),
        "Please provide at least an email or a phone number."
    );
}
