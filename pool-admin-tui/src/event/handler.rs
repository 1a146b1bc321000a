//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage, ShellMessage};
use crate::model::state::{POOL_MENU, SHORTCUTS_MENU};
use crate::model::{AddUserField, AppClientField, App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.current_page == Page::Landing {
        return handle_landing_keys(key);
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 搜索框输入中：字符全部进搜索框
    if app.focus.is_content() && is_searching(app) {
        return handle_search_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if let Some(msg) = handle_shell_keys(key, app) {
        return msg;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 普通字符输入（允许 Shift 输入大写和符号）
fn text_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

/// 当前页面的搜索框是否在输入中
fn is_searching(app: &App) -> bool {
    match app.current_page {
        Page::Systems => app.systems.searching,
        Page::Users => app.users.table.searching,
        Page::AppClients => app.app_clients.table.searching,
        Page::Landing | Page::Settings => false,
    }
}

/// 登出后的落地页
fn handle_landing_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Enter => AppMessage::Shell(ShellMessage::SignIn),
        KeyCode::Char('q') if key.modifiers.is_empty() => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

/// 侧边栏、标题栏菜单、个人菜单
fn handle_shell_keys(key: KeyEvent, app: &App) -> Option<AppMessage> {
    let msg = if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        ShellMessage::ToggleSidebar
    } else if DefaultKeymap::POOL_MENU.matches(&key) {
        ShellMessage::ToggleDropdown(POOL_MENU)
    } else if DefaultKeymap::SHORTCUTS_MENU.matches(&key) {
        ShellMessage::ToggleDropdown(SHORTCUTS_MENU)
    } else if DefaultKeymap::PROFILE_MENU.matches(&key) {
        ShellMessage::ToggleProfile
    } else if app.shell.profile.is_open() && key.code == KeyCode::Enter {
        // 个人菜单只有一项：Sign out
        ShellMessage::SignOut
    } else {
        return None;
    };
    Some(AppMessage::Shell(msg))
}

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::EndSearch),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        _ => text_char(&key).map_or(AppMessage::Noop, |ch| {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }),
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_VIEW.matches(&key) {
        return AppMessage::Content(ContentMessage::View);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match app.current_page {
        Page::Settings => handle_settings_keys(key),
        _ => handle_list_keys(key),
    }
}

/// 处理列表类页面的按键（系统卡片、用户、App Client）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::StartSearch);
    }
    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleFilter);
    }
    if DefaultKeymap::NEXT_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }
    if DefaultKeymap::PREV_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::AddUser { focus, .. } => handle_add_user_keys(key, *focus),
        Modal::AppClient { focus, .. } => handle_app_client_keys(key, *focus),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Credentials(_) | Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 表单通用：字段切换与提交
fn form_navigation(key: &KeyEvent) -> Option<AppMessage> {
    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ModalMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ModalMessage::PrevField,
        KeyCode::Enter => ModalMessage::Confirm,
        _ => return None,
    };
    Some(AppMessage::Modal(msg))
}

/// 处理添加用户弹窗的按键
fn handle_add_user_keys(key: KeyEvent, focus: usize) -> AppMessage {
    if let Some(msg) = form_navigation(&key) {
        return msg;
    }
    if DefaultKeymap::GENERATE_PASSWORD.matches(&key) {
        return AppMessage::Modal(ModalMessage::GeneratePassword);
    }
    if DefaultKeymap::ADD_ROW.matches(&key) {
        return AppMessage::Modal(ModalMessage::AddRow);
    }
    if DefaultKeymap::REMOVE_ROW.matches(&key) {
        return AppMessage::Modal(ModalMessage::RemoveRow);
    }

    if AddUserField::at(focus).is_toggle() {
        return match key.code {
            KeyCode::Left => AppMessage::Modal(ModalMessage::PrevOption),
            KeyCode::Right | KeyCode::Char(' ') => AppMessage::Modal(ModalMessage::NextOption),
            _ => AppMessage::Noop,
        };
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        _ => text_char(&key).map_or(AppMessage::Noop, |ch| {
            AppMessage::Modal(ModalMessage::Input(ch))
        }),
    }
}

/// 处理 App Client 弹窗的按键
fn handle_app_client_keys(key: KeyEvent, focus: usize) -> AppMessage {
    if let Some(msg) = form_navigation(&key) {
        return msg;
    }

    if let Some(AppClientField::Scope(_)) = AppClientField::at(focus) {
        return match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                AppMessage::Modal(ModalMessage::NextOption)
            }
            _ => AppMessage::Noop,
        };
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        _ => text_char(&key).map_or(AppMessage::Noop, |ch| {
            AppMessage::Modal(ModalMessage::Input(ch))
        }),
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_utils;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn search_mode_captures_characters() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        app.focus = FocusPanel::Content;
        app.users.table.searching = true;

        let msg = handle_event(press(KeyCode::Char('f'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::SearchInput('f'))));

        let msg = handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::SearchInput('A'))));

        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::EndSearch)));
    }

    #[test]
    fn toggle_fields_do_not_take_text() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        app.modal.active = Some(Modal::AddUser {
            focus: 5,
            error: None,
        });

        let msg = handle_event(press(KeyCode::Char(' '), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::NextOption)));

        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[test]
    fn landing_page_only_signs_in_or_quits() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Landing;

        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Shell(ShellMessage::SignIn)));

        let msg = handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[test]
    fn resize_carries_width() {
        let (app, _dir) = test_utils::app();
        let msg = handle_event(Event::Resize(80, 24), &app);
        assert!(matches!(msg, AppMessage::Resize(80)));
    }
}
