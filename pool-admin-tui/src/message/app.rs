//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 侧边栏与标题栏菜单
    Shell(ShellMessage),

    /// 返回 / 关闭菜单
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 终端宽度变化
    Resize(u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

/// 外壳消息
#[derive(Debug, Clone)]
pub enum ShellMessage {
    /// 展开 / 收起侧边栏
    ToggleSidebar,
    /// 展开 / 收起指定的标题栏下拉菜单
    ToggleDropdown(&'static str),
    /// 展开 / 收起个人菜单
    ToggleProfile,
    /// 退出登录
    SignOut,
    /// 从落地页重新进入控制台
    SignIn,
}
