//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息，以及外壳（侧边栏/菜单）消息
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     AppMessage 的变体大致分三类：
//!         - 全局：Quit / ToggleFocus / GoBack / ShowHelp / Resize
//!         - 外壳：Shell(ShellMessage)，侧边栏开关、下拉菜单、个人菜单、登出
//!         - 委托：Navigation(..) / Content(..) / Modal(..)
//!
//!     Noop 用于代替 Option::None，表示这个事件不产生任何消息。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::{AppMessage, ShellMessage};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
