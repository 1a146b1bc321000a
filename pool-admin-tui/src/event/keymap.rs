//! 快捷键配置
//!
//! 定义默认快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 外壳
    pub const TOGGLE_SIDEBAR: KeyBinding = KeyBinding::alt(KeyCode::Char('b'));
    pub const POOL_MENU: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const SHORTCUTS_MENU: KeyBinding = KeyBinding::alt(KeyCode::Char('k'));
    pub const PROFILE_MENU: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_VIEW: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // 列表
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageUp);

    // 表单
    pub const GENERATE_PASSWORD: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const ADD_ROW: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));
    pub const REMOVE_ROW: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
}
