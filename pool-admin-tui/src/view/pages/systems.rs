//! 系统卡片页面视图

use pool_admin_core::gallery::{CardView, Presence};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::CARD_HEIGHT;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 卡片列表上方占用的行数（搜索栏 + 空行）
pub const HEADER_LINES: u16 = 2;

/// 渲染系统卡片页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_LINES), Constraint::Min(1)])
        .split(area);

    render_header(app, frame, chunks[0]);

    if app.systems.displayed_count() == 0 {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", t().systems.no_cards),
            Styles::muted(),
        ));
        frame.render_widget(empty, chunks[1]);
    } else {
        render_cards(app, frame, chunks[1]);
    }
}

/// 搜索框 + 分类 + 过渡指示
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let systems = &app.systems;

    let mut spans = vec![Span::styled(format!(" {}: ", texts.common.search), Styles::muted())];
    if systems.searching {
        spans.push(Span::styled(
            format!("{}▎", systems.query),
            Style::default().fg(c.highlight),
        ));
    } else if systems.query.is_empty() {
        spans.push(Span::styled(texts.systems.search_placeholder, Styles::muted()));
    } else {
        spans.push(Span::styled(systems.query.as_str(), Style::default().fg(c.fg)));
    }

    spans.push(Span::styled("   │ ", Styles::muted()));
    spans.push(Span::styled(format!("{}: ", texts.systems.category), Styles::muted()));
    spans.push(Span::styled(
        format!("{} ▾", systems.category_label()),
        Style::default().fg(c.highlight),
    ));

    if systems.gallery.is_settling() {
        spans.push(Span::styled(
            format!("   {}", texts.systems.settling),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let systems = &app.systems;
    let focused = app.focus.is_content();

    let mut lines = Vec::new();
    for (index, view) in systems.gallery.displayed().enumerate().skip(systems.scroll) {
        if lines.len() >= usize::from(area.height) {
            break;
        }
        lines.extend(card_lines(&view, focused && index == systems.selected));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 一张卡片的 `CARD_HEIGHT` 行
fn card_lines(view: &CardView, selected: bool) -> Vec<Line<'static>> {
    let c = colors();
    let card = view.card;
    let fading = matches!(view.presence, Presence::Entering | Presence::Leaving);

    let title_style = if selected {
        Styles::selected()
    } else if fading {
        Styles::muted()
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };
    let body_style = if fading {
        Styles::muted()
    } else {
        Style::default().fg(c.fg)
    };
    let marker = if selected { "▶ " } else { "  " };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(card.title.clone(), title_style),
        ]),
        Line::styled(format!("  [{}]", card.category), Style::default().fg(c.highlight)),
        Line::styled(format!("  {}", card.description), body_style),
        Line::from(""),
    ];
    debug_assert_eq!(lines.len(), usize::from(CARD_HEIGHT));
    lines
}
