//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod shell;              // 侧边栏 / 菜单 / 登出
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表单提交都经过 app.backend（ConsoleBackend）：
//!         - 添加用户      backend.create_user(&mut form, &mut users.table.list)
//!         - 创建/保存     backend.submit_app_client(..)
//!                         创建成功时打开 Credentials 弹窗展示一次性密钥
//!         - 删除          Delete 先拿到 DeleteToken 打开 ConfirmDelete，
//!                         确认时 backend.delete_app_client(.., &token)
//!
//!     校验失败时表单和列表都不变，错误写在弹窗里，弹窗保持打开。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! GoBack（Esc）的优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 关闭弹窗（由 modal.rs 处理，同时撤销未确认的删除）
//!     2. 收起展开的下拉菜单 / 个人菜单
//!     3. 窄布局下侧边栏以遮罩形式打开时，相当于点击遮罩
//!     4. 清除状态栏消息
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;
mod shell;

use crate::message::{AppMessage, ModalMessage};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有弹窗打开或侧边栏收起时，不切换焦点
            if !app.modal.is_open() && app.shell.sidebar.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Shell(shell_msg) => {
            shell::update(app, shell_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                modal::update(app, ModalMessage::Close);
            } else if app.shell.any_menu_open() {
                app.shell.close_menus();
            } else if app.shell.sidebar.overlay_visible() {
                app.shell.sidebar.click_overlay();
                app.sync_focus();
            } else {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Resize(width) => {
            app.resize(width);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ShellMessage;
    use crate::model::{FocusPanel, Page};
    use crate::test_utils;

    #[test]
    fn narrow_resize_keeps_focus_on_content() {
        let (mut app, _dir) = test_utils::app();
        assert!(app.shell.sidebar.is_open());

        update(&mut app, AppMessage::Resize(80));
        // 侧边栏仍然打开，但以遮罩形式覆盖内容
        assert!(app.shell.sidebar.overlay_visible());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.shell.sidebar.is_open());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn escape_closes_menus_before_anything_else() {
        let (mut app, _dir) = test_utils::app();
        update(&mut app, AppMessage::Shell(ShellMessage::ToggleProfile));
        assert!(app.shell.profile.is_open());

        app.set_status("hello");
        update(&mut app, AppMessage::GoBack);
        assert!(!app.shell.profile.is_open());
        assert_eq!(app.status_message.as_deref(), Some("hello"));

        update(&mut app, AppMessage::GoBack);
        assert!(app.status_message.is_none());
        assert_eq!(app.current_page, Page::Systems);
    }

    #[test]
    fn quit_sets_flag() {
        let (mut app, _dir) = test_utils::app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
