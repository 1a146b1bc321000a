//! 登出后的落地页

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::util::centered_rect;
use crate::view::theme::{colors, Styles};

/// 渲染落地页（不带外壳）
pub fn render(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), area);

    let lines = vec![
        Line::styled(
            texts.common.app_name,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(texts.landing.title, Styles::title()),
        Line::from(texts.landing.message),
        Line::from(""),
        Line::styled(texts.landing.hint, Styles::muted()),
    ];

    let popup = centered_rect(60, 8, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border(true)));
    frame.render_widget(paragraph, popup);
}
