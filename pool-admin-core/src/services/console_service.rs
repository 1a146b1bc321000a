//! 控制台服务
//!
//! 负责从数据源加载各列表，并把表单提交先交给提交目标、成功后再写入本地存储

use std::sync::Arc;

use crate::credentials::EntropySource;
use crate::error::{ConsoleError, ConsoleResult};
use crate::filter::CategoryMatch;
use crate::form::{AddUserForm, AppClientForm, DeleteToken, SubmitOutcome};
use crate::gallery::Gallery;
use crate::list::ListController;
use crate::store::RecordStore;
use crate::traits::{RecordSource, SubmissionKind, SubmissionSink};
use crate::types::{AppClient, User};

/// 控制台服务
pub struct ConsoleService {
    source: Arc<dyn RecordSource>,
    sink: Arc<dyn SubmissionSink>,
}

/// 按错误类别选择日志级别
fn log_failure(action: &str, err: &ConsoleError) {
    if err.is_expected() {
        log::warn!("{action} rejected: {err}");
    } else {
        log::error!("{action} failed: {err}");
    }
}

impl ConsoleService {
    /// 创建控制台服务实例
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self { source, sink }
    }

    /// 加载用户列表（状态筛选区分大小写）
    pub async fn load_users(&self) -> ConsoleResult<ListController<User>> {
        let users = self.source.users().await?;
        log::info!("Loaded {} users", users.len());
        Ok(ListController::new(
            RecordStore::new(users)?,
            CategoryMatch::Exact,
        ))
    }

    /// 加载 App Client 列表
    pub async fn load_app_clients(&self) -> ConsoleResult<ListController<AppClient>> {
        let clients = self.source.app_clients().await?;
        log::info!("Loaded {} app clients", clients.len());
        Ok(ListController::new(
            RecordStore::new(clients)?,
            CategoryMatch::Exact,
        ))
    }

    /// 加载系统卡片
    pub async fn load_gallery(&self) -> ConsoleResult<Gallery> {
        let cards = self.source.system_cards().await?;
        log::info!("Loaded {} system cards", cards.len());
        Ok(Gallery::new(RecordStore::new(cards)?))
    }

    /// 提交新增用户表单
    ///
    /// 流程：校验 -> 投递 payload -> 插入用户列表。任一步失败都不修改列表。
    pub async fn create_user(
        &self,
        form: &mut AddUserForm,
        users: &mut ListController<User>,
    ) -> ConsoleResult<User> {
        let result = async {
            let prepared = form.prepare(users)?;
            let payload = serde_json::to_value(&prepared.payload)?;
            self.sink.submit(SubmissionKind::CreateUser, payload).await?;
            form.commit(users, prepared)
        }
        .await;

        if let Err(e) = &result {
            log_failure("Create user", e);
        }
        result
    }

    /// 提交 App Client 表单（创建或保存）
    pub async fn submit_app_client<E: EntropySource>(
        &self,
        form: &mut AppClientForm<E>,
        clients: &mut ListController<AppClient>,
    ) -> ConsoleResult<SubmitOutcome> {
        let result = async {
            let prepared = form.prepare(clients)?;
            let kind = if prepared.is_create() {
                SubmissionKind::CreateAppClient
            } else {
                SubmissionKind::UpdateAppClient
            };
            let payload = serde_json::to_value(prepared.payload())?;
            self.sink.submit(kind, payload).await?;
            form.commit(clients, prepared)
        }
        .await;

        if let Err(e) = &result {
            log_failure("Submit app client", e);
        }
        result
    }

    /// 确认删除 App Client
    pub async fn delete_app_client<E: EntropySource>(
        &self,
        form: &mut AppClientForm<E>,
        clients: &mut ListController<AppClient>,
        token: &DeleteToken,
    ) -> ConsoleResult<AppClient> {
        let result = async {
            if form.pending_delete() != Some(token) {
                return Err(ConsoleError::InvalidFormState(
                    "delete was not confirmed".to_string(),
                ));
            }
            let payload = serde_json::json!({ "clientId": token.id() });
            self.sink
                .submit(SubmissionKind::DeleteAppClient, payload)
                .await?;
            form.confirm_delete(clients, token)
        }
        .await;

        if let Err(e) = &result {
            log_failure("Delete app client", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InviteMode;
    use crate::sample::StaticRecordSource;
    use crate::test_utils::RecordingSink;

    fn service(sink: Arc<RecordingSink>) -> ConsoleService {
        ConsoleService::new(Arc::new(StaticRecordSource), sink)
    }

    #[tokio::test]
    async fn create_user_delivers_then_prepends() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone());
        let mut users = service.load_users().await.unwrap();
        let mut form = AddUserForm {
            username: "new.user".into(),
            email: "new.user@example.com".into(),
            ..AddUserForm::default()
        };

        let user = service.create_user(&mut form, &mut users).await.unwrap();

        assert_eq!(user.username, "new.user");
        assert_eq!(users.store().len(), 16);
        let submissions = sink.submissions().await;
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, SubmissionKind::CreateUser);
        assert_eq!(submissions[0].1["email"], "new.user@example.com");
    }

    #[tokio::test]
    async fn invalid_user_never_reaches_sink() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone());
        let mut users = service.load_users().await.unwrap();
        let mut form = AddUserForm {
            email: "x@example.com".into(),
            invite_mode: InviteMode::Temp,
            temp_password: "short".into(),
            ..AddUserForm::default()
        };

        assert!(service.create_user(&mut form, &mut users).await.is_err());
        assert!(sink.submissions().await.is_empty());
        assert_eq!(users.store().len(), 15);
    }

    #[tokio::test]
    async fn sink_failure_leaves_store_unchanged() {
        let sink = Arc::new(RecordingSink::new());
        sink.set_error(Some("backend down".into())).await;
        let service = service(sink.clone());
        let mut clients = service.load_app_clients().await.unwrap();
        let mut form = AppClientForm::default();
        form.open_create().unwrap();
        form.set_name("Test").unwrap();

        let err = service
            .submit_app_client(&mut form, &mut clients)
            .await
            .unwrap_err();

        assert!(matches!(err, ConsoleError::Submission(_)));
        assert_eq!(clients.store().len(), 1);
        assert!(form.mode().is_open());
    }

    #[tokio::test]
    async fn create_client_payload_has_no_secret() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone());
        let mut clients = service.load_app_clients().await.unwrap();
        let mut form = AppClientForm::default();
        form.open_create().unwrap();
        form.set_name("Test").unwrap();

        let outcome = service
            .submit_app_client(&mut form, &mut clients)
            .await
            .unwrap();

        let SubmitOutcome::Created(issued) = outcome else {
            panic!("expected create outcome");
        };
        let submissions = sink.submissions().await;
        assert_eq!(submissions[0].0, SubmissionKind::CreateAppClient);
        assert_eq!(submissions[0].1["clientId"], issued.client_id.as_str());
        assert!(!submissions[0].1.to_string().contains(&issued.client_secret));
    }

    #[tokio::test]
    async fn delete_requires_pending_token() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone());
        let mut clients = service.load_app_clients().await.unwrap();
        let mut form = AppClientForm::default();

        let token = form.request_delete(&clients, "as-ewfc2mewf").unwrap();
        form.cancel_delete();
        assert!(service
            .delete_app_client(&mut form, &mut clients, &token)
            .await
            .is_err());
        assert!(sink.submissions().await.is_empty());

        let token = form.request_delete(&clients, "as-ewfc2mewf").unwrap();
        service
            .delete_app_client(&mut form, &mut clients, &token)
            .await
            .unwrap();
        assert!(clients.store().is_empty());
        assert_eq!(sink.submissions().await[0].0, SubmissionKind::DeleteAppClient);
    }

    #[tokio::test]
    async fn gallery_loads_all_cards_visible() {
        let service = service(Arc::new(RecordingSink::new()));
        let gallery = service.load_gallery().await.unwrap();
        assert_eq!(gallery.displayed().count(), 7);
    }
}
