//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入和终端尺寸变化转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!     · handle_event    事件分发
//!
//!         Event::Key(KeyEvent)            → handle_key_event
//!         Event::Resize(width, height)    → AppMessage::Resize(width)，侧边栏据此自动收起
//!         其他                             → AppMessage::Noop
//!
//!         handle_key_event 的判断顺序：
//!             1. 落地页：只响应 Enter（重新登录）和 q（退出）
//!             2. 有弹窗打开：handle_modal_keys
//!             3. 退出快捷键
//!             4. 搜索框输入中：所有字符进搜索框
//!             5. 帮助、侧边栏、菜单等全局快捷键
//!             6. 焦点在导航面板：handle_navigation_keys
//!             7. 焦点在内容面板：handle_content_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Esc / Ctrl+C    → ModalMessage::Close
//!         Tab / ↓         → ModalMessage::NextField
//!         Shift+Tab / ↑   → ModalMessage::PrevField
//!         Enter           → ModalMessage::Confirm
//!         ← → 空格        → PrevOption / NextOption（仅开关类字段）
//!         字符输入         → ModalMessage::Input(c)
//!         Backspace       → ModalMessage::Backspace
//!
//!     添加用户弹窗另有 Alt+g（生成密码）、Alt+n / Alt+x（增删属性行）。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
