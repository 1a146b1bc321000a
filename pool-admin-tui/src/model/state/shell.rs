//! 外壳状态：侧边栏、标题栏下拉菜单、个人菜单

use pool_admin_core::shell::{DropdownSet, ProfileMenu, Sidebar};

/// 用户池信息下拉菜单
pub const POOL_MENU: &str = "pool";
/// 快捷键下拉菜单
pub const SHORTCUTS_MENU: &str = "shortcuts";

/// 侧边栏宽度（列）
pub const SIDEBAR_WIDTH: u16 = 24;

/// 外壳状态
pub struct ShellState {
    pub sidebar: Sidebar,
    pub dropdowns: DropdownSet,
    pub profile: ProfileMenu,
}

impl ShellState {
    pub fn new(width: u16, breakpoint: u16) -> Self {
        Self {
            sidebar: Sidebar::new(width, breakpoint),
            dropdowns: DropdownSet::new([POOL_MENU, SHORTCUTS_MENU]),
            profile: ProfileMenu::default(),
        }
    }

    /// 是否有任何菜单展开
    pub fn any_menu_open(&self) -> bool {
        self.dropdowns.expanded().is_some() || self.profile.is_open()
    }

    /// Esc：关闭所有菜单
    pub fn close_menus(&mut self) {
        self.dropdowns.close_all();
        self.profile.close();
    }
}
