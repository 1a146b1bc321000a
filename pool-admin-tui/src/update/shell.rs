//! 外壳更新逻辑：侧边栏、标题栏菜单、登出

use pool_admin_core::shell::ShellEvent;

use crate::i18n::t;
use crate::message::ShellMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理外壳消息
pub fn update(app: &mut App, msg: ShellMessage) {
    match msg {
        ShellMessage::ToggleSidebar => {
            app.shell.sidebar.toggle();
            if app.shell.sidebar.is_open() {
                app.focus = FocusPanel::Navigation;
            } else {
                app.sync_focus();
            }
        }

        ShellMessage::ToggleDropdown(name) => match app.shell.dropdowns.toggle(name) {
            Ok(true) => app.shell.profile.close(),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Unknown dropdown: {e}");
                app.set_status(e.user_message());
            }
        },

        ShellMessage::ToggleProfile => {
            app.shell.profile.toggle();
            if app.shell.profile.is_open() {
                app.shell.dropdowns.close_all();
            }
        }

        ShellMessage::SignOut => match app.shell.profile.sign_out() {
            ShellEvent::SignedOut => {
                tracing::info!("Signed out");
                app.shell.close_menus();
                app.modal.close();
                app.current_page = Page::Landing;
                app.set_status(t().status.signed_out);
            }
        },

        ShellMessage::SignIn => {
            app.current_page = app
                .navigation
                .current_id()
                .map_or_else(Page::default, Page::from_nav);
            app.clear_status();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::{POOL_MENU, SHORTCUTS_MENU};
    use crate::test_utils;

    #[test]
    fn dropdowns_and_profile_are_exclusive() {
        let (mut app, _dir) = test_utils::app();

        update(&mut app, ShellMessage::ToggleDropdown(POOL_MENU));
        assert!(app.shell.dropdowns.is_expanded(POOL_MENU));

        update(&mut app, ShellMessage::ToggleDropdown(SHORTCUTS_MENU));
        assert!(!app.shell.dropdowns.is_expanded(POOL_MENU));
        assert!(app.shell.dropdowns.is_expanded(SHORTCUTS_MENU));

        update(&mut app, ShellMessage::ToggleProfile);
        assert!(app.shell.profile.is_open());
        assert_eq!(app.shell.dropdowns.expanded(), None);

        update(&mut app, ShellMessage::ToggleDropdown(POOL_MENU));
        assert!(!app.shell.profile.is_open());
    }

    #[test]
    fn sign_out_lands_on_landing_page_and_back() {
        let (mut app, _dir) = test_utils::app();
        app.navigation.selected = 1;
        update(&mut app, ShellMessage::ToggleProfile);

        update(&mut app, ShellMessage::SignOut);
        assert_eq!(app.current_page, Page::Landing);
        assert!(!app.shell.profile.is_open());

        update(&mut app, ShellMessage::SignIn);
        assert_eq!(app.current_page, Page::Users);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn closing_sidebar_moves_focus_to_content() {
        let (mut app, _dir) = test_utils::app();
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, ShellMessage::ToggleSidebar);
        assert!(!app.shell.sidebar.is_open());
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, ShellMessage::ToggleSidebar);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }
}
