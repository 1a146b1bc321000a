//! 控制台后端
//!
//! 持有一个 current-thread tokio 运行时，把 `ConsoleService` 的异步接口
//! 包装成同步调用，供 Update 层直接使用。

use std::sync::Arc;

use anyhow::{Context, Result};
use pool_admin_core::credentials::EntropySource;
use pool_admin_core::form::{AddUserForm, AppClientForm, DeleteToken, SubmitOutcome};
use pool_admin_core::gallery::Gallery;
use pool_admin_core::sample::{LoggingSubmissionSink, StaticRecordSource};
use pool_admin_core::traits::{RecordSource, SubmissionSink};
use pool_admin_core::types::{AppClient, User};
use pool_admin_core::{ConsoleResult, ConsoleService, ListController};
use tokio::runtime::{Builder, Runtime};

/// 启动时加载的全部列表
pub struct InitialData {
    pub users: ListController<User>,
    pub app_clients: ListController<AppClient>,
    pub gallery: Gallery,
}

/// 控制台后端
pub struct ConsoleBackend {
    runtime: Runtime,
    service: ConsoleService,
}

impl ConsoleBackend {
    /// 使用内置示例数据与日志提交目标
    pub fn new() -> Result<Self> {
        Self::with_parts(Arc::new(StaticRecordSource), Arc::new(LoggingSubmissionSink))
    }

    /// 使用自定义数据源和提交目标
    pub fn with_parts(
        source: Arc<dyn RecordSource>,
        sink: Arc<dyn SubmissionSink>,
    ) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .build()
            .context("failed to start the async runtime")?;
        Ok(Self {
            runtime,
            service: ConsoleService::new(source, sink),
        })
    }

    /// 加载用户、App Client 与系统卡片
    pub fn load(&self) -> ConsoleResult<InitialData> {
        self.runtime.block_on(async {
            Ok(InitialData {
                users: self.service.load_users().await?,
                app_clients: self.service.load_app_clients().await?,
                gallery: self.service.load_gallery().await?,
            })
        })
    }

    pub fn create_user(
        &self,
        form: &mut AddUserForm,
        users: &mut ListController<User>,
    ) -> ConsoleResult<User> {
        self.runtime.block_on(self.service.create_user(form, users))
    }

    pub fn submit_app_client<E: EntropySource>(
        &self,
        form: &mut AppClientForm<E>,
        clients: &mut ListController<AppClient>,
    ) -> ConsoleResult<SubmitOutcome> {
        self.runtime
            .block_on(self.service.submit_app_client(form, clients))
    }

    pub fn delete_app_client<E: EntropySource>(
        &self,
        form: &mut AppClientForm<E>,
        clients: &mut ListController<AppClient>,
        token: &DeleteToken,
    ) -> ConsoleResult<AppClient> {
        self.runtime
            .block_on(self.service.delete_app_client(form, clients, token))
    }
}
