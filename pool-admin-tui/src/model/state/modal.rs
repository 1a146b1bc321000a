//! 弹窗/对话框状态
//!
//! 表单本身的数据保存在对应页面的状态里（`UsersState::form`、
//! `AppClientsState::form`），弹窗只记录焦点位置和要显示的错误。

use pool_admin_core::form::{DeleteToken, IssuedCredentials};
use pool_admin_core::types::Scope;

/// 添加用户弹窗中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddUserField {
    Username,
    Email,
    Phone,
    GivenName,
    FamilyName,
    InviteMode,
    Delivery,
    TempPassword,
    RequireReset,
    EmailVerified,
    PhoneVerified,
    /// 第 n 行自定义属性的名称
    AttributeName(usize),
    /// 第 n 行自定义属性的值
    AttributeValue(usize),
}

/// 固定字段，按 Tab 顺序
const ADD_USER_FIELDS: [AddUserField; 11] = [
    AddUserField::Username,
    AddUserField::Email,
    AddUserField::Phone,
    AddUserField::GivenName,
    AddUserField::FamilyName,
    AddUserField::InviteMode,
    AddUserField::Delivery,
    AddUserField::TempPassword,
    AddUserField::RequireReset,
    AddUserField::EmailVerified,
    AddUserField::PhoneVerified,
];

impl AddUserField {
    /// 字段总数（每行属性占两个焦点位置）
    pub fn count(attribute_rows: usize) -> usize {
        ADD_USER_FIELDS.len() + attribute_rows * 2
    }

    /// 焦点索引对应的字段
    pub fn at(focus: usize) -> Self {
        match ADD_USER_FIELDS.get(focus) {
            Some(field) => *field,
            None => {
                let offset = focus - ADD_USER_FIELDS.len();
                if offset % 2 == 0 {
                    Self::AttributeName(offset / 2)
                } else {
                    Self::AttributeValue(offset / 2)
                }
            }
        }
    }

    /// 第 `row` 行属性名称的焦点索引
    pub fn attribute_focus(row: usize) -> usize {
        ADD_USER_FIELDS.len() + row * 2
    }

    /// 开关 / 单选类字段（空格或 ←→ 切换）
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Self::InviteMode
                | Self::Delivery
                | Self::RequireReset
                | Self::EmailVerified
                | Self::PhoneVerified
        )
    }
}

/// App Client 弹窗中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppClientField {
    Name,
    Callbacks,
    Logouts,
    Scope(Scope),
}

impl AppClientField {
    const TEXT_FIELDS: usize = 3;

    pub fn count() -> usize {
        Self::TEXT_FIELDS + Scope::all().len()
    }

    pub fn at(focus: usize) -> Option<Self> {
        match focus {
            0 => Some(Self::Name),
            1 => Some(Self::Callbacks),
            2 => Some(Self::Logouts),
            n => Scope::all()
                .get(n - Self::TEXT_FIELDS)
                .copied()
                .map(Self::Scope),
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 添加用户
    AddUser { focus: usize, error: Option<String> },
    /// App Client 创建 / 编辑 / 查看（模式由表单决定）
    AppClient { focus: usize, error: Option<String> },
    /// 创建成功后一次性展示的凭证
    Credentials(IssuedCredentials),
    /// 删除确认（focus: 0 = 取消, 1 = 删除）
    ConfirmDelete {
        token: DeleteToken,
        name: String,
        focus: usize,
    },
    /// 错误提示
    Error { title: String, message: String },
    /// 帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_add_user(&mut self) {
        self.active = Some(Modal::AddUser {
            focus: 0,
            error: None,
        });
    }

    pub fn show_app_client(&mut self) {
        self.active = Some(Modal::AppClient {
            focus: 0,
            error: None,
        });
    }

    pub fn show_credentials(&mut self, issued: IssuedCredentials) {
        self.active = Some(Modal::Credentials(issued));
    }

    pub fn show_confirm_delete(&mut self, token: DeleteToken, name: String) {
        self.active = Some(Modal::ConfirmDelete {
            token,
            name,
            focus: 0,
        });
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
