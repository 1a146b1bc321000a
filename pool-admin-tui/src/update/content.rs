//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use pool_admin_core::gallery::FilterOutcome;
use pool_admin_core::types::Record;
use pool_admin_core::ConsoleError;

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => handle_select_previous(app),
        ContentMessage::SelectNext => handle_select_next(app),
        ContentMessage::SelectFirst => handle_select_first(app),
        ContentMessage::SelectLast => handle_select_last(app),
        ContentMessage::Confirm | ContentMessage::View => handle_view(app),

        // ========== CRUD 操作 ==========
        ContentMessage::Add => handle_add(app),
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => handle_delete(app),

        // ========== 搜索与筛选 ==========
        ContentMessage::StartSearch => set_searching(app, true),
        ContentMessage::EndSearch => set_searching(app, false),
        ContentMessage::SearchInput(ch) => handle_search_input(app, Some(ch)),
        ContentMessage::SearchBackspace => handle_search_input(app, None),
        ContentMessage::CycleFilter => handle_cycle_filter(app),

        // ========== 分页 ==========
        ContentMessage::NextPage => handle_page(app, true),
        ContentMessage::PrevPage => handle_page(app, false),

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Systems => app.systems.select_previous(),
        Page::Users => app.users.table.select_previous(),
        Page::AppClients => app.app_clients.table.select_previous(),
        Page::Settings => app.settings.select_previous(),
        Page::Landing => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Systems => app.systems.select_next(),
        Page::Users => app.users.table.select_next(),
        Page::AppClients => app.app_clients.table.select_next(),
        Page::Settings => app.settings.select_next(),
        Page::Landing => {}
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Systems => app.systems.select_first(),
        Page::Users => app.users.table.select_first(),
        Page::AppClients => app.app_clients.table.select_first(),
        Page::Landing | Page::Settings => {}
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page {
        Page::Systems => app.systems.select_last(),
        Page::Users => app.users.table.select_last(),
        Page::AppClients => app.app_clients.table.select_last(),
        Page::Landing | Page::Settings => {}
    }
}

// ========== CRUD 操作处理 ==========

/// 表单打开失败：预期内的错误只进状态栏
fn report(app: &mut App, e: &ConsoleError) {
    if e.is_expected() {
        tracing::warn!("{e}");
        app.set_status(e.user_message());
    } else {
        tracing::error!("{e}");
        app.modal.show_error(t().modal.error_title, e.user_message());
    }
}

fn handle_add(app: &mut App) {
    match app.current_page {
        Page::Users => {
            app.users.form.reset();
            app.modal.show_add_user();
            app.clear_status();
        }
        Page::AppClients => match app.app_clients.form.open_create() {
            Ok(()) => {
                app.modal.show_app_client();
                app.clear_status();
            }
            Err(e) => report(app, &e),
        },
        _ => app.set_status(t().status.not_supported),
    }
}

fn handle_edit(app: &mut App) {
    if app.current_page != Page::AppClients {
        app.set_status(t().status.not_supported);
        return;
    }
    let Some(id) = app.app_clients.table.selected_id() else {
        app.set_status(t().status.nothing_selected);
        return;
    };
    let state = &mut app.app_clients;
    match state.form.open_edit(&state.table.list, &id) {
        Ok(()) => app.modal.show_app_client(),
        Err(e) => report(app, &e),
    }
}

fn handle_view(app: &mut App) {
    if app.current_page != Page::AppClients {
        return;
    }
    let Some(id) = app.app_clients.table.selected_id() else {
        app.set_status(t().status.nothing_selected);
        return;
    };
    let state = &mut app.app_clients;
    match state.form.open_view(&state.table.list, &id) {
        Ok(()) => app.modal.show_app_client(),
        Err(e) => report(app, &e),
    }
}

fn handle_delete(app: &mut App) {
    if app.current_page != Page::AppClients {
        app.set_status(t().status.not_supported);
        return;
    }
    let Some((id, name)) = app
        .app_clients
        .table
        .selected_record()
        .map(|client| (client.id().to_string(), client.name.clone()))
    else {
        app.set_status(t().status.nothing_selected);
        return;
    };
    let state = &mut app.app_clients;
    match state.form.request_delete(&state.table.list, &id) {
        Ok(token) => app.modal.show_confirm_delete(token, name),
        Err(e) => report(app, &e),
    }
}

// ========== 搜索与筛选 ==========

fn set_searching(app: &mut App, searching: bool) {
    match app.current_page {
        Page::Systems => app.systems.searching = searching,
        Page::Users => app.users.table.searching = searching,
        Page::AppClients => app.app_clients.table.searching = searching,
        Page::Landing | Page::Settings => {}
    }
}

/// `Some(ch)` 输入字符，`None` 退格
fn handle_search_input(app: &mut App, ch: Option<char>) {
    match app.current_page {
        Page::Systems => {
            let outcome = match ch {
                Some(ch) => app.systems.push_query(ch),
                None => app.systems.pop_query(),
            };
            report_outcome(app, outcome);
        }
        Page::Users => match ch {
            Some(ch) => app.users.table.push_query(ch),
            None => app.users.table.pop_query(),
        },
        Page::AppClients => match ch {
            Some(ch) => app.app_clients.table.push_query(ch),
            None => app.app_clients.table.pop_query(),
        },
        Page::Landing | Page::Settings => {}
    }
}

fn handle_cycle_filter(app: &mut App) {
    match app.current_page {
        Page::Systems => {
            let outcome = app.systems.cycle_category();
            report_outcome(app, outcome);
        }
        Page::Users => app.users.cycle_status_filter(),
        _ => app.set_status(t().status.not_supported),
    }
}

/// 过渡中被丢弃的过滤请求会在稳定后自动补做，这里只提示一下
fn report_outcome(app: &mut App, outcome: FilterOutcome) {
    match outcome {
        FilterOutcome::Applied => app.clear_status(),
        FilterOutcome::Dropped => app.set_status(t().status.filter_dropped),
    }
}

// ========== 分页 ==========

fn handle_page(app: &mut App, forward: bool) {
    let moved = match app.current_page {
        Page::Users if forward => app.users.table.next_page(),
        Page::Users => app.users.table.prev_page(),
        Page::AppClients if forward => app.app_clients.table.next_page(),
        Page::AppClients => app.app_clients.table.prev_page(),
        _ => return,
    };
    if !moved {
        tracing::debug!("Page change ignored at the list boundary");
    }
}

// ========== 设置 ==========

fn handle_toggle(app: &mut App, forward: bool) {
    if app.current_page == Page::Settings {
        app.settings.toggle(forward);
        app.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_admin_core::gallery::SETTLE_MS;
    use pool_admin_core::types::UserStatus;

    use crate::model::state::SettingItem;
    use crate::model::Modal;
    use crate::test_utils;

    #[test]
    fn users_page_filters_to_inactive_on_one_page() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;

        update(&mut app, ContentMessage::CycleFilter);
        update(&mut app, ContentMessage::CycleFilter);
        assert_eq!(app.users.status_filter, Some(UserStatus::Inactive));

        let model = app.users.table.list.render();
        assert_eq!(model.rows.len(), 5);
        assert_eq!((model.summary.from, model.summary.to, model.summary.total), (1, 5, 5));
        assert!(!model.next_enabled);

        update(&mut app, ContentMessage::NextPage);
        assert_eq!(app.users.table.list.current_page(), 1);
    }

    #[test]
    fn paging_moves_between_windows() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;

        update(&mut app, ContentMessage::NextPage);
        assert_eq!(app.users.table.list.current_page(), 2);
        assert_eq!(app.users.table.row_count(), 5);

        update(&mut app, ContentMessage::PrevPage);
        update(&mut app, ContentMessage::PrevPage);
        assert_eq!(app.users.table.list.current_page(), 1);
    }

    #[test]
    fn search_on_systems_reports_dropped_input() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Systems;

        update(&mut app, ContentMessage::StartSearch);
        assert!(app.systems.searching);
        update(&mut app, ContentMessage::SearchInput('s'));
        assert!(app.status_message.is_none());
        update(&mut app, ContentMessage::SearchInput('t'));
        assert!(app.status_message.is_some());

        app.tick(SETTLE_MS);
        assert!(!app.systems.gallery.is_stale());
        assert_eq!(app.systems.gallery.filter().query(), "st");

        update(&mut app, ContentMessage::EndSearch);
        assert!(!app.systems.searching);
    }

    #[test]
    fn edit_opens_form_for_selected_client() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;

        update(&mut app, ContentMessage::Edit);
        assert!(matches!(app.modal.active, Some(Modal::AppClient { .. })));
        assert!(app.app_clients.form.mode().is_editable());
        assert_eq!(app.app_clients.form.fields().name, "Admission System");
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;

        update(&mut app, ContentMessage::Delete);
        let Some(Modal::ConfirmDelete { token, name, .. }) = &app.modal.active else {
            panic!("confirm dialog expected");
        };
        assert_eq!(name, "Admission System");
        assert_eq!(app.app_clients.form.pending_delete(), Some(token));
        assert_eq!(app.app_clients.table.list.store().len(), 1);
    }

    #[test]
    fn add_is_not_available_on_systems_page() {
        let (mut app, _dir) = test_utils::app();
        update(&mut app, ContentMessage::Add);
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn breakpoint_setting_is_saved() {
        let (mut app, dir) = test_utils::app();
        app.current_page = Page::Settings;
        update(&mut app, ContentMessage::SelectPrevious);
        assert_eq!(app.settings.current_item(), Some(SettingItem::Breakpoint));

        update(&mut app, ContentMessage::ToggleNext);
        assert_eq!(app.shell.sidebar.breakpoint(), 110);
        let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
        assert!(saved.contains("110"));
    }
}
