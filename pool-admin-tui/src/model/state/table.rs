//! 列表页通用状态
//!
//! 用户页和 App Client 页共享：搜索框、当前页内的选中行、翻页。
//! 过滤与分页本身都在 core 的 `ListController` 里完成。

use pool_admin_core::types::Record;
use pool_admin_core::ListController;

/// 列表页状态
pub struct TableState<R: Record> {
    /// 列表控制器（存储 + 过滤 + 分页）
    pub list: ListController<R>,
    /// 当前页内选中的行
    pub selected: usize,
    /// 搜索框原文
    pub query: String,
    /// 是否正在输入搜索
    pub searching: bool,
}

impl<R: Record> TableState<R> {
    pub fn new(list: ListController<R>) -> Self {
        Self {
            list,
            selected: 0,
            query: String::new(),
            searching: false,
        }
    }

    /// 当前页的行数
    pub fn row_count(&self) -> usize {
        self.list.window().range().len()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
    }

    /// 增删记录后把选中行拉回当前页范围内
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    /// 选中标识为 `id` 的记录（必要时翻到它所在的页）。
    /// 记录已被过滤掉时返回 false，选中行只做范围修正。
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.list.reveal(id) {
            Some(row) => {
                self.selected = row;
                true
            }
            None => {
                self.clamp_selection();
                false
            }
        }
    }

    /// 获取当前选中的记录
    pub fn selected_record(&self) -> Option<&R> {
        self.list.page_records().nth(self.selected)
    }

    /// 当前选中记录的标识
    pub fn selected_id(&self) -> Option<String> {
        self.selected_record().map(|record| record.id().to_string())
    }

    /// 搜索框输入一个字符
    pub fn push_query(&mut self, ch: char) {
        self.query.push(ch);
        self.apply_query();
    }

    /// 搜索框删除一个字符
    pub fn pop_query(&mut self) {
        if self.query.pop().is_some() {
            self.apply_query();
        }
    }

    fn apply_query(&mut self) {
        self.list.set_query(&self.query);
        self.selected = 0;
    }

    /// 下一页（已在最后一页时无操作）
    pub fn next_page(&mut self) -> bool {
        let moved = self.list.next_page();
        if moved {
            self.selected = 0;
        }
        moved
    }

    /// 上一页（已在第一页时无操作）
    pub fn prev_page(&mut self) -> bool {
        let moved = self.list.prev_page();
        if moved {
            self.selected = 0;
        }
        moved
    }
}
