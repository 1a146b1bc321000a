//! App Client 列表页面视图

use ratatui::{layout::Constraint, layout::Rect, Frame};

use crate::i18n::t;
use crate::model::App;

use super::table::{self, SearchBox, TableView};

const WIDTHS: [Constraint; 4] = [
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(12),
    Constraint::Length(12),
];

/// 渲染 App Client 列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let clients = &app.app_clients;

    let search = SearchBox {
        query: &clients.table.query,
        searching: clients.table.searching,
        placeholder: texts.app_clients.search_placeholder,
        filter: None,
    };
    let view = TableView {
        columns: &texts.app_clients.columns,
        widths: &WIDTHS,
        status_column: None,
        selected: clients.table.selected,
        focused: app.focus.is_content(),
    };

    table::render(frame, area, &search, &view, &clients.table.list.render());
}
