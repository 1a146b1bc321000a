//! 弹窗组件

use pool_admin_core::form::{AddUserForm, Delivery, FormMode, IssuedCredentials, InviteMode};
use pool_admin_core::types::Scope;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;
use crate::util::{centered_rect, inset};
use crate::view::theme::{colors, Styles};

/// 字段标签宽度（显示宽度）
const LABEL_WIDTH: usize = 22;
/// 表单弹窗宽度
const FORM_WIDTH: u16 = 72;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AddUser { focus, error } => {
            render_add_user(frame, &app.users.form, *focus, error.as_deref());
        }
        Modal::AppClient { focus, error } => {
            render_app_client(app, frame, *focus, error.as_deref());
        }
        Modal::Credentials(issued) => render_credentials(frame, issued),
        Modal::ConfirmDelete { name, focus, .. } => render_confirm_delete(frame, name, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 画出弹窗边框并返回内容区域
fn frame_popup(frame: &mut Frame, title: &str, width: u16, height: u16, accent: Color) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(colors().bg));
    frame.render_widget(block, area);

    inset(area, 2, 1)
}

fn line_count(lines: &[Line]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

/// 左侧对齐的字段标签
fn label_span(label: &str, focused: bool) -> Span<'static> {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Styles::muted()
    };
    let prefix = if focused { "▶ " } else { "  " };
    Span::styled(format!("{prefix}{label}{:padding$}", ""), style)
}

/// 文本输入行
fn text_line(label: &str, value: &str, focused: bool, enabled: bool) -> Line<'static> {
    let c = colors();
    let value_span = if focused && enabled {
        Span::styled(format!("{value}▎"), Style::default().fg(Color::Cyan))
    } else if enabled {
        Span::styled(value.to_string(), Style::default().fg(c.fg))
    } else {
        Span::styled(value.to_string(), Styles::muted())
    };
    Line::from(vec![label_span(label, focused), value_span])
}

/// 复选框行
fn check_line(label: &str, checked: bool, focused: bool, enabled: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = match (focused, enabled) {
        (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        (_, false) => Styles::muted(),
        _ => Style::default().fg(colors().fg),
    };
    Line::from(vec![label_span(label, focused), Span::styled(mark, style)])
}

/// 单选行（聚焦时显示 ◀ value ▶）
fn choice_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let c = colors();
    if focused {
        Line::from(vec![
            label_span(label, true),
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                value.to_string(),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            label_span(label, false),
            Span::raw("  "),
            Span::styled(value.to_string(), Style::default().fg(c.highlight)),
        ])
    }
}

fn error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(message) => Line::styled(
            format!("  {message}"),
            Style::default().fg(colors().error),
        ),
        None => Line::from(""),
    }
}

fn hint_line(hint: &str) -> Line<'static> {
    Line::styled(hint.to_string(), Styles::muted()).alignment(Alignment::Center)
}

/// 渲染添加用户弹窗
fn render_add_user(frame: &mut Frame, form: &AddUserForm, focus: usize, error: Option<&str>) {
    let texts = &t().modal.add_user;
    let temp_mode = form.invite_mode == InviteMode::Temp;

    let invite_value = match form.invite_mode {
        InviteMode::Invite => texts.invite,
        InviteMode::Temp => texts.temp,
    };
    let delivery_value = match form.delivery {
        Delivery::Email => texts.delivery_email,
        Delivery::Sms => texts.delivery_sms,
    };

    let mut lines = vec![
        text_line(texts.username, &form.username, focus == 0, true),
        text_line(texts.email, &form.email, focus == 1, true),
        text_line(texts.phone, &form.phone, focus == 2, true),
        text_line(texts.given_name, &form.given_name, focus == 3, true),
        text_line(texts.family_name, &form.family_name, focus == 4, true),
        Line::from(""),
        choice_line(texts.invite_mode, invite_value, focus == 5),
        choice_line(texts.delivery, delivery_value, focus == 6),
        text_line(texts.temp_password, &form.temp_password, focus == 7, temp_mode),
        check_line(texts.require_reset, form.require_reset, focus == 8, true),
        check_line(texts.email_verified, form.email_verified, focus == 9, true),
        check_line(texts.phone_verified, form.phone_verified, focus == 10, true),
        Line::from(""),
        Line::styled(format!("  {}", texts.attributes), Styles::title()),
    ];

    let mut index = 11;
    for row in &form.attributes {
        lines.push(text_line(texts.attribute_name, &row.name, focus == index, true));
        lines.push(text_line(texts.attribute_value, &row.value, focus == index + 1, true));
        index += 2;
    }

    lines.push(error_line(error));
    lines.push(hint_line(t().modal.form_hint));
    lines.push(hint_line(texts.extra_hint));

    let height = line_count(&lines) + 2;
    let inner = frame_popup(frame, texts.title, FORM_WIDTH, height, Color::Cyan);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染 App Client 创建 / 编辑 / 查看弹窗
fn render_app_client(app: &App, frame: &mut Frame, focus: usize, error: Option<&str>) {
    let texts = t();
    let modal_texts = &texts.modal.app_client;
    let form = &app.app_clients.form;
    let view = form.view();
    let fields = form.fields();
    let enabled = view.inputs_enabled;

    let title = match form.mode() {
        FormMode::Create => modal_texts.create_title,
        FormMode::Edit(_) => modal_texts.edit_title,
        FormMode::View(_) | FormMode::Closed => modal_texts.view_title,
    };

    let mut lines = Vec::new();
    if view.id_row_visible {
        if let Some(id) = form.mode().target_id() {
            lines.push(text_line(modal_texts.client_id, id, false, false));
        }
    }
    lines.push(text_line(modal_texts.name, &fields.name, focus == 0, enabled));
    lines.push(text_line(modal_texts.callbacks, &fields.callbacks, focus == 1, enabled));
    lines.push(text_line(modal_texts.logouts, &fields.logouts, focus == 2, enabled));
    lines.push(Line::from(""));
    lines.push(Line::styled(format!("  {}", modal_texts.scopes), Styles::title()));
    for (i, scope) in Scope::all().iter().enumerate() {
        lines.push(check_line(
            scope.as_str(),
            fields.has_scope(*scope),
            focus == 3 + i,
            enabled,
        ));
    }

    lines.push(error_line(error));

    // 查看模式没有提交按钮
    let mut buttons = vec![Span::styled(
        format!("[ {} ]", if enabled { texts.common.cancel } else { texts.common.close }),
        Styles::muted(),
    )];
    if view.submit_label.is_some() {
        let label = match form.mode() {
            FormMode::Create => texts.common.create,
            _ => texts.common.save,
        };
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            format!("[ {label} ]"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(buttons).alignment(Alignment::Center));
    if enabled {
        lines.push(hint_line(texts.modal.form_hint));
    }

    let height = line_count(&lines) + 2;
    let inner = frame_popup(frame, title, FORM_WIDTH, height, Color::Cyan);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染一次性凭证
fn render_credentials(frame: &mut Frame, issued: &IssuedCredentials) {
    let texts = &t().modal.credentials;
    let c = colors();

    let lines = vec![
        Line::styled(format!("  {}", issued.name), Styles::title()),
        Line::from(""),
        text_line(texts.client_id, &issued.client_id, false, true),
        Line::from(vec![
            label_span(texts.client_secret, false),
            Span::styled(
                issued.client_secret.clone(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::styled(format!("  {}", texts.warning), Style::default().fg(c.warning)),
        Line::from(""),
        hint_line("Enter / Esc"),
    ];

    let height = line_count(&lines) + 2;
    let inner = frame_popup(frame, texts.title, 80, height, c.success);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let button = |label: &str, focused: bool, color: Color| {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let lines = vec![
        Line::from(""),
        Line::from(texts.modal.confirm_delete.message).alignment(Alignment::Center),
        Line::styled(name.to_string(), Styles::title()).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            button(texts.common.cancel, focus == 0, c.fg),
            Span::raw("     "),
            button(texts.common.delete, focus == 1, c.error),
        ])
        .alignment(Alignment::Center),
    ];

    let height = line_count(&lines) + 2;
    let inner = frame_popup(frame, texts.modal.confirm_delete.title, 50, height, c.error);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let inner = frame_popup(frame, title, 60, 8, c.error);
    let paragraph = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        hint_line("Enter / Esc"),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().modal.help;
    let key_width = help.rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    let lines: Vec<Line> = help
        .rows
        .iter()
        .map(|(key, desc)| {
            let padding = key_width.saturating_sub(key.width());
            Line::from(vec![
                Span::styled(format!("{key}{:padding$}", ""), Styles::hint_key()),
                Span::raw("   "),
                Span::styled(*desc, Styles::hint_desc()),
            ])
        })
        .collect();

    let height = line_count(&lines) + 2;
    let inner = frame_popup(frame, help.title, 56, height, Color::Cyan);
    frame.render_widget(Paragraph::new(lines), inner);
}
