//! 弹窗更新逻辑

use pool_admin_core::credentials::EntropySource;
use pool_admin_core::form::{AddUserForm, AppClientForm, Delivery, InviteMode, SubmitOutcome};
use pool_admin_core::ConsoleResult;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{AddUserField, App, AppClientField, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AddUser { .. } => handle_add_user(app, msg),
        Modal::AppClient { .. } => handle_app_client(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Credentials(_) | Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 焦点循环移动
fn step(focus: usize, total: usize, forward: bool) -> usize {
    let total = total.max(1);
    if forward {
        (focus + 1) % total
    } else {
        (focus + total - 1) % total
    }
}

/// 处理添加用户弹窗
fn handle_add_user(app: &mut App, msg: ModalMessage) {
    let Some(Modal::AddUser {
        ref mut focus,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    let users = &mut app.users;
    let total = AddUserField::count(users.form.attributes.len());

    match msg {
        ModalMessage::Close => {
            users.form.reset();
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => *focus = step(*focus, total, true),
        ModalMessage::PrevField => *focus = step(*focus, total, false),

        ModalMessage::PrevOption | ModalMessage::NextOption => {
            toggle_add_user_field(&mut users.form, AddUserField::at(*focus));
            *error = None;
        }

        ModalMessage::Input(ch) => {
            if let Some(text) = add_user_text(&mut users.form, AddUserField::at(*focus)) {
                text.push(ch);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            if let Some(text) = add_user_text(&mut users.form, AddUserField::at(*focus)) {
                text.pop();
            }
        }

        ModalMessage::GeneratePassword => {
            if let Err(e) = users.form.generate_password(&mut users.generator) {
                tracing::error!("Failed to generate password: {e}");
                *error = Some(e.user_message());
            }
        }

        ModalMessage::AddRow => {
            users.form.add_attribute();
            *focus = AddUserField::attribute_focus(users.form.attributes.len() - 1);
        }

        ModalMessage::RemoveRow => {
            let row = match AddUserField::at(*focus) {
                AddUserField::AttributeName(row) | AddUserField::AttributeValue(row) => row,
                _ => match users.form.attributes.len().checked_sub(1) {
                    Some(last) => last,
                    None => return,
                },
            };
            if let Err(e) = users.form.remove_attribute(row) {
                *error = Some(e.user_message());
                return;
            }
            let total = AddUserField::count(users.form.attributes.len());
            *focus = (*focus).min(total - 1);
        }

        ModalMessage::Confirm => {
            match app
                .backend
                .create_user(&mut users.form, &mut users.table.list)
            {
                Ok(user) => {
                    users.table.select_first();
                    app.modal.close();
                    app.set_status(format!("{} {}", t().status.user_created, user.username));
                }
                Err(e) => *error = Some(e.user_message()),
            }
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 可输入文本的字段
fn add_user_text(form: &mut AddUserForm, field: AddUserField) -> Option<&mut String> {
    match field {
        AddUserField::Username => Some(&mut form.username),
        AddUserField::Email => Some(&mut form.email),
        AddUserField::Phone => Some(&mut form.phone),
        AddUserField::GivenName => Some(&mut form.given_name),
        AddUserField::FamilyName => Some(&mut form.family_name),
        // 只有选了临时密码方式才能输入
        AddUserField::TempPassword if form.invite_mode == InviteMode::Temp => {
            Some(&mut form.temp_password)
        }
        AddUserField::AttributeName(row) => form.attributes.get_mut(row).map(|r| &mut r.name),
        AddUserField::AttributeValue(row) => form.attributes.get_mut(row).map(|r| &mut r.value),
        _ => None,
    }
}

/// 单选与开关字段（两个选项，左右方向效果相同）
fn toggle_add_user_field(form: &mut AddUserForm, field: AddUserField) {
    match field {
        AddUserField::InviteMode => {
            form.invite_mode = match form.invite_mode {
                InviteMode::Invite => InviteMode::Temp,
                InviteMode::Temp => InviteMode::Invite,
            };
        }
        AddUserField::Delivery => {
            form.delivery = match form.delivery {
                Delivery::Email => Delivery::Sms,
                Delivery::Sms => Delivery::Email,
            };
        }
        AddUserField::RequireReset => form.require_reset = !form.require_reset,
        AddUserField::EmailVerified => form.email_verified = !form.email_verified,
        AddUserField::PhoneVerified => form.phone_verified = !form.phone_verified,
        _ => {}
    }
}

/// 处理 App Client 弹窗
fn handle_app_client(app: &mut App, msg: ModalMessage) {
    let Some(Modal::AppClient {
        ref mut focus,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    let clients = &mut app.app_clients;

    match msg {
        ModalMessage::Close => {
            clients.form.close();
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => *focus = step(*focus, AppClientField::count(), true),
        ModalMessage::PrevField => *focus = step(*focus, AppClientField::count(), false),

        ModalMessage::PrevOption | ModalMessage::NextOption => {
            if let Some(AppClientField::Scope(scope)) = AppClientField::at(*focus) {
                *error = clients.form.toggle_scope(scope).err().map(|e| e.user_message());
            }
        }

        ModalMessage::Input(ch) => {
            let result = edit_app_client_text(&mut clients.form, *focus, |text| text.push(ch));
            *error = result.err().map(|e| e.user_message());
        }

        ModalMessage::Backspace => {
            let result = edit_app_client_text(&mut clients.form, *focus, |text| {
                text.pop();
            });
            *error = result.err().map(|e| e.user_message());
        }

        ModalMessage::Confirm => {
            // 查看模式没有提交按钮，Enter 直接关闭
            if !clients.form.mode().is_editable() {
                clients.form.close();
                app.modal.close();
                return;
            }

            match app
                .backend
                .submit_app_client(&mut clients.form, &mut clients.table.list)
            {
                Ok(SubmitOutcome::Created(issued)) => {
                    clients.table.select_first();
                    let status = format!("{} {}", t().status.client_created, issued.name);
                    app.modal.show_credentials(issued);
                    app.set_status(status);
                }
                Ok(SubmitOutcome::Saved(id)) => {
                    // 保存后列表回到第一页，选中行跟随被编辑的记录
                    clients.table.select_id(&id);
                    app.modal.close();
                    app.set_status(format!("{} {id}", t().status.client_saved));
                }
                Err(e) => *error = Some(e.user_message()),
            }
        }

        ModalMessage::ToggleDeleteFocus
        | ModalMessage::GeneratePassword
        | ModalMessage::AddRow
        | ModalMessage::RemoveRow => {}
    }
}

/// 修改焦点所在的文本字段；表单不可编辑时返回错误
fn edit_app_client_text<E: EntropySource>(
    form: &mut AppClientForm<E>,
    focus: usize,
    edit: impl FnOnce(&mut String),
) -> ConsoleResult<()> {
    match AppClientField::at(focus) {
        Some(AppClientField::Name) => {
            let mut text = form.fields().name.clone();
            edit(&mut text);
            form.set_name(&text)
        }
        Some(AppClientField::Callbacks) => {
            let mut text = form.fields().callbacks.clone();
            edit(&mut text);
            form.set_callbacks(&text)
        }
        Some(AppClientField::Logouts) => {
            let mut text = form.fields().logouts.clone();
            edit(&mut text);
            form.set_logouts(&text)
        }
        Some(AppClientField::Scope(_)) | None => Ok(()),
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref token,
        ref name,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.app_clients.form.cancel_delete();
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleDeleteFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::PrevOption
        | ModalMessage::NextOption => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 0 {
                // 取消
                app.app_clients.form.cancel_delete();
                app.modal.close();
                app.clear_status();
                return;
            }

            let token = token.clone();
            let name = name.clone();
            let clients = &mut app.app_clients;
            match app
                .backend
                .delete_app_client(&mut clients.form, &mut clients.table.list, &token)
            {
                Ok(_) => {
                    clients.table.clamp_selection();
                    app.modal.close();
                    app.set_status(format!("{} {name}", t().status.client_deleted));
                }
                Err(e) => {
                    clients.form.cancel_delete();
                    app.modal.show_error(t().modal.error_title, e.user_message());
                }
            }
        }

        ModalMessage::Input(_)
        | ModalMessage::Backspace
        | ModalMessage::GeneratePassword
        | ModalMessage::AddRow
        | ModalMessage::RemoveRow => {}
    }
}

/// 处理只读弹窗（凭证、错误、帮助）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_admin_core::types::{Record, UserStatus};

    use crate::message::ContentMessage;
    use crate::model::Page;
    use crate::test_utils;
    use crate::update::content;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, ModalMessage::Input(ch));
        }
    }

    fn focus_on(app: &mut App, target: usize) {
        while !matches!(
            app.modal.active,
            Some(Modal::AddUser { focus, .. } | Modal::AppClient { focus, .. }) if focus == target
        ) {
            update(app, ModalMessage::NextField);
        }
    }

    #[test]
    fn add_user_requires_contact() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        content::update(&mut app, ContentMessage::Add);

        type_text(&mut app, "nobody");
        update(&mut app, ModalMessage::Confirm);

        let Some(Modal::AddUser { error, .. }) = &app.modal.active else {
            panic!("add user dialog should stay open");
        };
        assert!(error.is_some());
        assert_eq!(app.users.table.list.store().len(), 15);
        assert_eq!(app.users.form.username, "nobody");
    }

    #[test]
    fn add_user_prepends_record() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        content::update(&mut app, ContentMessage::Add);

        focus_on(&mut app, 1);
        type_text(&mut app, "new.person@example.com");
        focus_on(&mut app, 3);
        type_text(&mut app, "New");
        update(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        let first = app.users.table.list.page_records().next().unwrap();
        assert_eq!(first.id(), "new.person@example.com");
        assert_eq!(first.status, UserStatus::Active);
        assert_eq!(app.users.table.list.store().len(), 16);
        assert!(app.users.form.email.is_empty());
    }

    #[test]
    fn attribute_rows_follow_focus() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        content::update(&mut app, ContentMessage::Add);

        update(&mut app, ModalMessage::AddRow);
        type_text(&mut app, "dept");
        update(&mut app, ModalMessage::NextField);
        type_text(&mut app, "registrar");
        assert_eq!(app.users.form.attributes[0].name, "dept");
        assert_eq!(app.users.form.attributes[0].value, "registrar");

        update(&mut app, ModalMessage::RemoveRow);
        assert!(app.users.form.attributes.is_empty());
        let Some(Modal::AddUser { focus, .. }) = app.modal.active else {
            panic!("dialog closed unexpectedly");
        };
        assert_eq!(focus, AddUserField::count(0) - 1);
    }

    #[test]
    fn generated_password_switches_to_temp_mode() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::Users;
        content::update(&mut app, ContentMessage::Add);

        update(&mut app, ModalMessage::GeneratePassword);
        assert_eq!(app.users.form.invite_mode, InviteMode::Temp);
        assert_eq!(app.users.form.temp_password.chars().count(), 16);
    }

    #[test]
    fn create_client_shows_secret_once() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;
        content::update(&mut app, ContentMessage::Add);

        type_text(&mut app, "Registrar Portal");
        focus_on(&mut app, 3);
        update(&mut app, ModalMessage::NextOption);
        update(&mut app, ModalMessage::Confirm);

        let Some(Modal::Credentials(issued)) = &app.modal.active else {
            panic!("credentials dialog expected");
        };
        assert_eq!(issued.name, "Registrar Portal");
        assert!(issued.client_id.starts_with("conf"));
        assert_eq!(issued.client_secret.len(), 48);

        let created = app.app_clients.table.selected_record().unwrap();
        assert_eq!(created.client_id, issued.client_id);
        assert_eq!(created.scopes, "openid");

        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(!app.app_clients.form.mode().is_open());
    }

    #[test]
    fn view_mode_rejects_edits_and_closes_on_enter() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;
        content::update(&mut app, ContentMessage::View);

        update(&mut app, ModalMessage::Input('x'));
        let Some(Modal::AppClient { error, .. }) = &app.modal.active else {
            panic!("view dialog expected");
        };
        assert!(error.is_some());
        assert_eq!(app.app_clients.form.fields().name, "Admission System");

        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn delete_needs_explicit_confirmation() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;

        content::update(&mut app, ContentMessage::Delete);
        // 默认焦点在取消按钮上
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(app.app_clients.form.pending_delete().is_none());
        assert_eq!(app.app_clients.table.list.store().len(), 1);

        content::update(&mut app, ContentMessage::Delete);
        update(&mut app, ModalMessage::ToggleDeleteFocus);
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(app.app_clients.table.list.store().is_empty());
        assert!(app.app_clients.table.list.render().empty);
    }

    #[test]
    fn saved_edit_keeps_the_edited_client_selected() {
        let (mut app, _dir) = test_utils::app();
        app.current_page = Page::AppClients;
        for i in 0..10 {
            content::update(&mut app, ContentMessage::Add);
            type_text(&mut app, &format!("Portal {i}"));
            update(&mut app, ModalMessage::Confirm);
            update(&mut app, ModalMessage::Confirm);
        }
        assert_eq!(app.app_clients.table.list.store().len(), 11);

        content::update(&mut app, ContentMessage::NextPage);
        let edited = app.app_clients.table.selected_id().unwrap();
        assert_eq!(edited, "as-ewfc2mewf");

        content::update(&mut app, ContentMessage::Edit);
        type_text(&mut app, "!");
        update(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert_eq!(app.app_clients.table.selected_id().as_deref(), Some(edited.as_str()));
        assert_eq!(
            app.app_clients.table.selected_record().unwrap().name,
            "Admission System!"
        );
    }
}
