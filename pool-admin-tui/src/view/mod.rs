//! View 层
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         render()                            │
//! │   只读取 App，不修改状态                                    │
//! │                                                             │
//! │   layout      标题栏 / 侧边栏 / 页面 / 状态栏 / 菜单        │
//! │   components  导航、状态栏、弹窗                            │
//! │   pages       系统卡片、用户、App Client、设置、落地页      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod components;
pub mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
