//! App Client 页面状态

use pool_admin_core::form::AppClientForm;
use pool_admin_core::types::AppClient;
use pool_admin_core::ListController;

use super::TableState;

/// App Client 页面状态
pub struct AppClientsState {
    pub table: TableState<AppClient>,
    /// 创建 / 编辑 / 查看 表单，以及两步删除确认
    pub form: AppClientForm,
}

impl AppClientsState {
    pub fn new(list: ListController<AppClient>) -> Self {
        Self {
            table: TableState::new(list),
            form: AppClientForm::default(),
        }
    }
}
