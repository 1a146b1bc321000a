//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：如 `users.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**
//! 5. **状态栏提示归 `hints.*`，状态栏消息归 `status.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub shell: ShellTexts,
    pub landing: LandingTexts,
    pub systems: SystemsTexts,
    pub users: UsersTexts,
    pub app_clients: AppClientsTexts,
    pub settings: SettingsTexts,
    pub modal: ModalTexts,
    pub status: StatusTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub search: &'static str,
    pub all: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub create: &'static str,
    pub save: &'static str,
    pub no_results: &'static str,
    /// "Showing {from} to {to} of {total}" 的各段
    pub showing: &'static str,
    pub to: &'static str,
    pub of: &'static str,
    pub page: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
}

/// 状态栏快捷键说明
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub search: &'static str,
    pub filter: &'static str,
    pub page: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub view: &'static str,
    pub delete: &'static str,
    pub modify: &'static str,
    pub sidebar: &'static str,
    pub quit: &'static str,
}

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub systems: &'static str,
    pub users: &'static str,
    pub app_clients: &'static str,
    pub settings: &'static str,
}

/// 标题栏菜单（下拉菜单与个人菜单）
pub struct ShellTexts {
    pub pool_menu: &'static str,
    pub pool_name: &'static str,
    pub pool_users: &'static str,
    pub pool_clients: &'static str,
    pub shortcuts_menu: &'static str,
    pub profile: &'static str,
    pub signed_in_as: &'static str,
    pub sign_out: &'static str,
}

/// 登出后的落地页
pub struct LandingTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub hint: &'static str,
}

/// 系统卡片页
pub struct SystemsTexts {
    pub category: &'static str,
    pub search_placeholder: &'static str,
    pub no_cards: &'static str,
    pub settling: &'static str,
}

/// 用户页
pub struct UsersTexts {
    pub columns: [&'static str; 6],
    pub status_filter: &'static str,
    pub search_placeholder: &'static str,
}

/// App Client 页
pub struct AppClientsTexts {
    pub columns: [&'static str; 4],
    pub search_placeholder: &'static str,
}

/// 设置页
pub struct SettingsTexts {
    pub theme: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
    pub language: &'static str,
    pub breakpoint: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub add_user: AddUserTexts,
    pub app_client: AppClientModalTexts,
    pub credentials: CredentialsTexts,
    pub confirm_delete: ConfirmDeleteTexts,
    pub help: HelpTexts,
    pub error_title: &'static str,
    pub form_hint: &'static str,
}

pub struct AddUserTexts {
    pub title: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub given_name: &'static str,
    pub family_name: &'static str,
    pub invite_mode: &'static str,
    pub invite: &'static str,
    pub temp: &'static str,
    pub delivery: &'static str,
    pub delivery_email: &'static str,
    pub delivery_sms: &'static str,
    pub temp_password: &'static str,
    pub require_reset: &'static str,
    pub email_verified: &'static str,
    pub phone_verified: &'static str,
    pub attributes: &'static str,
    pub attribute_name: &'static str,
    pub attribute_value: &'static str,
    pub extra_hint: &'static str,
}

pub struct AppClientModalTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub view_title: &'static str,
    pub name: &'static str,
    pub client_id: &'static str,
    pub callbacks: &'static str,
    pub logouts: &'static str,
    pub scopes: &'static str,
}

pub struct CredentialsTexts {
    pub title: &'static str,
    pub client_id: &'static str,
    pub client_secret: &'static str,
    pub warning: &'static str,
}

pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
}

/// 状态栏消息前缀
pub struct StatusTexts {
    pub user_created: &'static str,
    pub client_created: &'static str,
    pub client_saved: &'static str,
    pub client_deleted: &'static str,
    pub filter_dropped: &'static str,
    pub signed_out: &'static str,
    pub nothing_selected: &'static str,
    pub not_supported: &'static str,
    pub config_failed: &'static str,
}
