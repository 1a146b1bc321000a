//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod app_clients;
mod modal;
mod settings;
mod shell;
mod systems;
mod table;
mod users;

pub use app_clients::AppClientsState;
pub use modal::{AddUserField, AppClientField, Modal, ModalState};
pub use settings::{SettingItem, SettingsState};
pub use shell::{ShellState, POOL_MENU, SHORTCUTS_MENU, SIDEBAR_WIDTH};
pub use systems::{SystemsState, CARD_HEIGHT};
pub use table::TableState;
pub use users::UsersState;
