//! 用户页面状态

use pool_admin_core::credentials::CredentialGenerator;
use pool_admin_core::form::AddUserForm;
use pool_admin_core::types::{User, UserStatus};
use pool_admin_core::ListController;

use super::TableState;

/// 用户页面状态
pub struct UsersState {
    pub table: TableState<User>,
    /// 添加用户表单
    pub form: AddUserForm,
    /// 临时密码生成器
    pub generator: CredentialGenerator,
    /// 状态筛选（None = 全部）
    pub status_filter: Option<UserStatus>,
}

impl UsersState {
    pub fn new(list: ListController<User>) -> Self {
        Self {
            table: TableState::new(list),
            form: AddUserForm::default(),
            generator: CredentialGenerator::os(),
            status_filter: None,
        }
    }

    /// 全部 → ACTIVE → INACTIVE → 全部
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => UserStatus::all().first().copied(),
            Some(current) => UserStatus::all()
                .iter()
                .skip_while(|s| **s != current)
                .nth(1)
                .copied(),
        };
        self.table
            .list
            .set_category(self.status_filter.map(UserStatus::as_str));
        self.table.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_admin_core::filter::CategoryMatch;
    use pool_admin_core::sample;
    use pool_admin_core::RecordStore;

    #[test]
    fn status_filter_cycles_through_all_statuses() {
        let store = RecordStore::new(sample::users()).unwrap();
        let mut users = UsersState::new(ListController::new(store, CategoryMatch::Exact));

        users.cycle_status_filter();
        assert_eq!(users.status_filter, Some(UserStatus::Active));
        assert_eq!(users.table.list.filtered_len(), 10);

        users.cycle_status_filter();
        assert_eq!(users.status_filter, Some(UserStatus::Inactive));
        let model = users.table.list.render();
        assert_eq!(model.rows.len(), 5);
        assert!(!model.prev_enabled);
        assert!(!model.next_enabled);

        users.cycle_status_filter();
        assert_eq!(users.status_filter, None);
        assert_eq!(users.table.list.filtered_len(), 15);
    }
}
