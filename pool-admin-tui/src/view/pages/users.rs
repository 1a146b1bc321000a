//! 用户列表页面视图

use pool_admin_core::types::UserStatus;
use ratatui::{layout::Constraint, layout::Rect, Frame};

use crate::i18n::t;
use crate::model::App;

use super::table::{self, SearchBox, TableView};

const WIDTHS: [Constraint; 6] = [
    Constraint::Fill(2),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(10),
    Constraint::Length(12),
    Constraint::Length(14),
];

/// 状态列，按 ACTIVE / INACTIVE 着色
const STATUS_COLUMN: usize = 3;

/// 渲染用户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let users = &app.users;

    let filter_value = users
        .status_filter
        .map_or(texts.common.all, UserStatus::as_str);

    let search = SearchBox {
        query: &users.table.query,
        searching: users.table.searching,
        placeholder: texts.users.search_placeholder,
        filter: Some(format!("{}: {filter_value}", texts.users.status_filter)),
    };
    let view = TableView {
        columns: &texts.users.columns,
        widths: &WIDTHS,
        status_column: Some(STATUS_COLUMN),
        selected: users.table.selected,
        focused: app.focus.is_content(),
    };

    table::render(frame, area, &search, &view, &users.table.list.render());
}
