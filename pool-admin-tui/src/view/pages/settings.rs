//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme::{colors, Theme};

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 22;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let breakpoint_value = settings.breakpoint.to_string();

    let mut lines = vec![Line::from("")];
    for (index, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Theme => (
                texts.settings.theme,
                match settings.theme {
                    Theme::Dark => texts.settings.dark,
                    Theme::Light => texts.settings.light,
                },
            ),
            SettingItem::Language => (texts.settings.language, settings.language.display_name()),
            SettingItem::Breakpoint => (texts.settings.breakpoint, breakpoint_value.as_str()),
        };
        lines.push(render_setting_row(label, value, index == settings.selected_index));
    }

    lines.extend([
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {} | ", texts.hints.select), Style::default().fg(c.muted)),
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", texts.hints.modify), Style::default().fg(c.muted)),
        ]),
    ]);

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row(label: &str, value: &str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (left_arrow, right_arrow) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}{:label_padding$}", ""), label_style),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:left_padding$}", "")),
        Span::styled(value.to_string(), value_style),
        Span::raw(format!("{:right_padding$}", "")),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_align_regardless_of_script() {
        let width = |line: &Line| line.width();
        let english = render_setting_row("Theme", "Dark", false);
        let chinese = render_setting_row("主题", "深色", false);
        assert_eq!(width(&english), width(&chinese));
        assert_eq!(
            width(&render_setting_row("Theme", "Dark", true)),
            width(&english)
        );
    }
}
