//! 主布局渲染
//!
//! ```text
//! ┌ 标题栏：应用名 │ User Pool ▾ │ Shortcuts ▾ │              Profile ▾ ┐
//! ├──────────┬──────────────────────────────────────────────────────────┤
//! │ 侧边栏   │ 页面内容                                                 │
//! │ (宽布局) │                                                          │
//! ├──────────┴──────────────────────────────────────────────────────────┤
//! └ 状态栏：快捷键提示 │ 状态消息                                       ┘
//! ```
//!
//! 窄布局下侧边栏不占列，而是以遮罩形式盖在页面内容上。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{POOL_MENU, SHORTCUTS_MENU, SIDEBAR_WIDTH};
use crate::model::{App, Page};
use crate::util::inset;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 标题栏 + 状态栏 + 页面边框占用的行数
const CHROME_LINES: u16 = 4;

/// 个人菜单里显示的登录名
const SIGNED_IN_USER: &str = "admin";

/// 系统卡片区域可用的行数，主循环据此计算卡片可见比例
pub fn page_body_height(terminal_height: u16) -> u16 {
    terminal_height
        .saturating_sub(CHROME_LINES)
        .saturating_sub(pages::systems::HEADER_LINES)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    if !app.current_page.has_shell() {
        pages::landing::render(frame, size);
        return;
    }

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    let menu_anchors = render_title_bar(app, frame, title_area);

    let sidebar = &app.shell.sidebar;
    if sidebar.content_inset() {
        // 宽布局：侧边栏占一列，内容右移
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(content_area);
        components::navigation::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    } else {
        render_page_content(app, frame, content_area);
        if sidebar.overlay_visible() {
            render_overlay(app, frame, content_area);
        }
    }

    components::statusbar::render(app, frame, status_area);

    render_menus(app, frame, content_area, &menu_anchors);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 标题栏上各个菜单的起始列
struct MenuAnchors {
    pool: u16,
    shortcuts: u16,
    profile: u16,
}

/// 渲染标题栏，返回菜单标签的位置
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) -> MenuAnchors {
    let texts = t();
    let c = colors();
    let bar = Styles::bar();
    let active = Style::default().bg(c.selected_bg).fg(c.selected_fg);

    let label = |text: &str, open: bool| {
        let arrow = if open { "▴" } else { "▾" };
        Span::styled(format!(" {text} {arrow} "), if open { active } else { bar })
    };

    let app_name = Span::styled(
        format!(" {} ", texts.common.app_name),
        Styles::title().patch(bar),
    );
    let pool = label(texts.shell.pool_menu, app.shell.dropdowns.is_expanded(POOL_MENU));
    let shortcuts = label(
        texts.shell.shortcuts_menu,
        app.shell.dropdowns.is_expanded(SHORTCUTS_MENU),
    );
    let profile = label(texts.shell.profile, app.shell.profile.is_open());

    let pool_x = area.x + span_width(&app_name) + 1;
    let shortcuts_x = pool_x + span_width(&pool) + 1;
    let profile_x = (area.x + area.width).saturating_sub(span_width(&profile));

    let left = Line::from(vec![
        app_name,
        Span::styled("│", bar),
        pool,
        Span::styled("│", bar),
        shortcuts,
    ]);
    frame.render_widget(Paragraph::new(left).style(bar), area);
    frame.render_widget(
        Paragraph::new(Line::from(profile)).alignment(Alignment::Right),
        area,
    );

    MenuAnchors {
        pool: pool_x,
        shortcuts: shortcuts_x,
        profile: profile_x,
    }
}

fn span_width(span: &Span) -> u16 {
    u16::try_from(span.width()).unwrap_or(u16::MAX)
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match app.current_page {
        Page::Systems => texts.nav.systems,
        Page::Users => texts.nav.users,
        Page::AppClients => texts.nav.app_clients,
        Page::Settings => texts.nav.settings,
        Page::Landing => texts.landing.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Systems => pages::systems::render(app, frame, inner_area),
        Page::Users => pages::users::render(app, frame, inner_area),
        Page::AppClients => pages::app_clients::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
        Page::Landing => {}
    }
}

/// 窄布局：遮罩 + 浮在上面的侧边栏
fn render_overlay(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(c.overlay)), area);

    let nav_area = Rect {
        width: SIDEBAR_WIDTH.min(area.width),
        ..area
    };
    components::navigation::render(app, frame, nav_area);
}

/// 标题栏下拉菜单与个人菜单
fn render_menus(app: &App, frame: &mut Frame, area: Rect, anchors: &MenuAnchors) {
    let texts = t();

    match app.shell.dropdowns.expanded() {
        Some(POOL_MENU) => {
            let users = app.users.table.list.store().len();
            let clients = app.app_clients.table.list.store().len();
            let lines = vec![
                menu_row(texts.shell.pool_name, texts.common.app_name),
                menu_row(texts.shell.pool_users, &users.to_string()),
                menu_row(texts.shell.pool_clients, &clients.to_string()),
            ];
            render_popup(frame, area, anchors.pool, texts.shell.pool_menu, lines);
        }
        Some(SHORTCUTS_MENU) => {
            let lines = texts
                .modal
                .help
                .rows
                .iter()
                .map(|(key, desc)| menu_row(key, desc))
                .collect();
            render_popup(frame, area, anchors.shortcuts, texts.shell.shortcuts_menu, lines);
        }
        _ => {}
    }

    if app.shell.profile.is_open() {
        let lines = vec![
            menu_row(texts.shell.signed_in_as, SIGNED_IN_USER),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Enter ", Styles::hint_key()),
                Span::styled(texts.shell.sign_out, Styles::title()),
            ]),
        ];
        render_popup(frame, area, anchors.profile, texts.shell.profile, lines);
    }
}

fn menu_row<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label}: "), Styles::muted()),
        Span::styled(value.to_string(), Styles::title()),
    ])
}

/// 从标题栏某一列向下弹出的小窗口
fn render_popup(frame: &mut Frame, area: Rect, x: u16, title: &str, lines: Vec<Line>) {
    let c = colors();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let x = x.min((area.x + area.width).saturating_sub(width));
    let popup = Rect::new(x, area.y, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, popup);
    frame.render_widget(Paragraph::new(lines), inset(popup, 1, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_height_never_underflows() {
        assert_eq!(page_body_height(3), 0);
        assert_eq!(page_body_height(30), 30 - CHROME_LINES - pages::systems::HEADER_LINES);
    }
}
