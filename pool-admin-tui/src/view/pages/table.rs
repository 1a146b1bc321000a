//! 用户页与 App Client 页共用的表格渲染
//!
//! 行内容、摘要和翻页按钮的可用状态都来自 core 的 `TableModel`，
//! 这里只负责排版和配色。

use pool_admin_core::types::StatusTone;
use pool_admin_core::TableModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 搜索框内容
pub struct SearchBox<'a> {
    pub query: &'a str,
    pub searching: bool,
    pub placeholder: &'a str,
    /// 搜索框右侧的筛选标签，如 "Status: ACTIVE"
    pub filter: Option<String>,
}

/// 表格配置
pub struct TableView<'a> {
    pub columns: &'a [&'a str],
    pub widths: &'a [Constraint],
    /// 按行状态着色的列
    pub status_column: Option<usize>,
    pub selected: usize,
    pub focused: bool,
}

/// 渲染搜索框 + 表格 + 分页摘要
pub fn render(frame: &mut Frame, area: Rect, search: &SearchBox, view: &TableView, model: &TableModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 搜索框
            Constraint::Length(1),
            Constraint::Min(1),    // 表格
            Constraint::Length(1), // 分页
        ])
        .split(area);

    render_search(frame, chunks[0], search);
    if model.empty {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", t().common.no_results),
            Styles::muted(),
        ));
        frame.render_widget(empty, chunks[2]);
    } else {
        render_rows(frame, chunks[2], view, model);
    }
    render_footer(frame, chunks[3], model);
}

fn render_search(frame: &mut Frame, area: Rect, search: &SearchBox) {
    let texts = t();
    let c = colors();

    let mut spans = vec![Span::styled(format!(" {}: ", texts.common.search), Styles::muted())];
    if search.searching {
        spans.push(Span::styled(
            format!("{}▎", search.query),
            Style::default().fg(c.highlight),
        ));
    } else if search.query.is_empty() {
        spans.push(Span::styled(search.placeholder, Styles::muted()));
    } else {
        spans.push(Span::styled(search.query, Style::default().fg(c.fg)));
    }

    if let Some(ref filter) = search.filter {
        spans.push(Span::styled("   │ ", Styles::muted()));
        spans.push(Span::styled(filter.clone(), Style::default().fg(c.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_rows(frame: &mut Frame, area: Rect, view: &TableView, model: &TableModel) {
    let c = colors();

    let header = Row::new(view.columns.iter().map(|title| Cell::from(*title)))
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows = model.rows.iter().map(|row| {
        let cells = row.cells.iter().enumerate().map(|(i, value)| {
            let tone_style = match (view.status_column == Some(i), row.tone) {
                (true, Some(StatusTone::Positive)) => Style::default().fg(c.success),
                (true, Some(StatusTone::Muted)) => Style::default().fg(c.muted),
                _ => Style::default().fg(c.fg),
            };
            Cell::from(value.as_str()).style(tone_style)
        });
        Row::new(cells)
    });

    let highlight = if view.focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, view.widths.iter().copied())
        .header(header)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(view.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, area: Rect, model: &TableModel) {
    let texts = t();
    let c = colors();
    let summary = &model.summary;

    let button = |label: &str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        Span::styled(format!("[{label}]"), style)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(
                " {} {} {} {} {} {}",
                texts.common.showing,
                summary.from,
                texts.common.to,
                summary.to,
                texts.common.of,
                summary.total
            ),
            Styles::muted(),
        ),
        Span::raw("   "),
        button(texts.common.prev, model.prev_enabled),
        Span::styled(
            format!(" {} {} ", texts.common.page, summary.page_label),
            Style::default().fg(c.fg),
        ),
        button(texts.common.next, model.next_enabled),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
