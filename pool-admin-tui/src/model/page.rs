//! 页面状态定义

use super::NavItemId;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 登出后的落地页
    Landing,
    /// 系统卡片
    #[default]
    Systems,
    /// 用户列表
    Users,
    /// App Client 列表
    AppClients,
    /// 设置
    Settings,
}

impl Page {
    /// 导航项对应的页面
    pub fn from_nav(id: NavItemId) -> Self {
        match id {
            NavItemId::Systems => Page::Systems,
            NavItemId::Users => Page::Users,
            NavItemId::AppClients => Page::AppClients,
            NavItemId::Settings => Page::Settings,
        }
    }

    /// 是否显示外壳（标题栏、侧边栏、状态栏）
    pub fn has_shell(self) -> bool {
        !matches!(self, Page::Landing)
    }
}
