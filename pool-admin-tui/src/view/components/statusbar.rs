//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息跟在提示后面
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints_text = &t().hints;
    let mut hints = Vec::new();

    if app.shell.sidebar.is_open() {
        hints.push(("Tab", hints_text.switch_panel));
    }

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", hints_text.navigate));
            hints.push(("Enter", hints_text.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Systems => {
                hints.push(("↑↓", hints_text.select));
                hints.push(("/", hints_text.search));
                hints.push(("f", hints_text.filter));
            }
            Page::Users => {
                hints.push(("↑↓", hints_text.select));
                hints.push(("/", hints_text.search));
                hints.push(("f", hints_text.filter));
                hints.push(("PgUp/PgDn", hints_text.page));
                hints.push(("Alt+a", hints_text.add));
            }
            Page::AppClients => {
                hints.push(("↑↓", hints_text.select));
                hints.push(("/", hints_text.search));
                hints.push(("Alt+a", hints_text.add));
                hints.push(("Alt+e", hints_text.edit));
                hints.push(("Alt+v", hints_text.view));
                hints.push(("Alt+d", hints_text.delete));
            }
            Page::Settings => {
                hints.push(("↑↓", hints_text.select));
                hints.push(("←→", hints_text.modify));
            }
            Page::Landing => {}
        },
    }

    hints.push(("Alt+b", hints_text.sidebar));
    hints.push(("Alt+q", hints_text.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn app_clients_page_lists_crud_hints() {
        let (mut app, _dir) = test_utils::app();
        app.focus = FocusPanel::Content;
        app.current_page = Page::AppClients;

        let keys: Vec<_> = get_hints(&app).into_iter().map(|(key, _)| key).collect();
        assert!(keys.contains(&"Alt+e"));
        assert!(keys.contains(&"Alt+d"));
        assert_eq!(keys.first(), Some(&"Tab"));
        assert_eq!(keys.last(), Some(&"Alt+q"));
    }
}
