//! 系统卡片页面状态
//!
//! 过滤和过渡动画都由 core 的 `Gallery` 负责，这里只保存搜索框、
//! 分类下拉框的选择，以及卡片列表的滚动位置。

use pool_admin_core::gallery::{FilterOutcome, Gallery, ALL_CATEGORIES};

/// 每张卡片占用的行数（标题、分类、描述、空行）
pub const CARD_HEIGHT: u16 = 4;

/// 系统卡片页面状态
pub struct SystemsState {
    pub gallery: Gallery,
    /// 搜索框原文
    pub query: String,
    /// 是否正在输入搜索
    pub searching: bool,
    /// 分类选项索引（0 = All）
    pub category_index: usize,
    /// 在显示中的卡片里选中的索引
    pub selected: usize,
    /// 第一张可见卡片的索引
    pub scroll: usize,
}

impl SystemsState {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            query: String::new(),
            searching: false,
            category_index: 0,
            selected: 0,
            scroll: 0,
        }
    }

    /// 当前分类选项的文字
    pub fn category_label(&self) -> String {
        self.gallery
            .category_options()
            .get(self.category_index)
            .cloned()
            .unwrap_or_else(|| ALL_CATEGORIES.to_string())
    }

    pub fn push_query(&mut self, ch: char) -> FilterOutcome {
        self.query.push(ch);
        self.gallery.set_query(&self.query)
    }

    pub fn pop_query(&mut self) -> FilterOutcome {
        self.query.pop();
        self.gallery.set_query(&self.query)
    }

    /// 切换到下一个分类选项（循环）
    pub fn cycle_category(&mut self) -> FilterOutcome {
        let options = self.gallery.category_options();
        self.category_index = (self.category_index + 1) % options.len().max(1);
        let option = options
            .get(self.category_index)
            .map_or(ALL_CATEGORIES, String::as_str);
        self.gallery.set_category(option)
    }

    /// 占用布局空间的卡片数
    pub fn displayed_count(&self) -> usize {
        self.gallery.displayed().count()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.displayed_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.displayed_count().saturating_sub(1);
    }

    /// 根据视口高度调整滚动位置，并把每张卡片的可见比例告诉 Gallery
    pub fn sync_visibility(&mut self, viewport_lines: u16) {
        self.selected = self.selected.min(self.displayed_count().saturating_sub(1));

        let per_screen = usize::from((viewport_lines / CARD_HEIGHT).max(1));
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + per_screen {
            self.scroll = self.selected + 1 - per_screen;
        }

        let mut ratios = Vec::new();
        let mut slot = 0;
        for view in self.gallery.cards() {
            let ratio = if view.presence.is_displayed() {
                let ratio = visible_ratio(slot, self.scroll, viewport_lines);
                slot += 1;
                ratio
            } else {
                0.0
            };
            ratios.push((view.card.title.clone(), ratio));
        }

        for (title, ratio) in ratios {
            if let Err(e) = self.gallery.observe(&title, ratio) {
                tracing::warn!("Failed to update card visibility: {e}");
            }
        }
    }
}

/// 第 `index` 张显示中的卡片落在视口内的比例
fn visible_ratio(index: usize, scroll: usize, viewport_lines: u16) -> f32 {
    let Some(offset) = index.checked_sub(scroll) else {
        return 0.0;
    };
    let top = offset.saturating_mul(usize::from(CARD_HEIGHT));
    let visible = usize::from(viewport_lines)
        .saturating_sub(top)
        .min(usize::from(CARD_HEIGHT));
    let visible = u16::try_from(visible).unwrap_or(CARD_HEIGHT);
    f32::from(visible) / f32::from(CARD_HEIGHT)
}
