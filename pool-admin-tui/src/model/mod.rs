//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ ShellMsg  │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ block_on          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  pool-admin-core  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 列表过滤、分页、表单校验、卡片过渡这些规则都在 core 里，
//! 这一层只把 core 的控制器组合起来，并补上终端界面自己的状态
//! （焦点、选中行、搜索框、滚动位置）。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 只是门牌号（当前在哪个页面），State 才是房间里的东西。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub focus: FocusPanel,
//!             pub navigation: NavigationState,
//!             pub current_page: Page,
//!             pub status_message: Option<String>,
//!             pub shell: ShellState,              // 侧边栏 + 标题栏菜单
//!
//!             pub systems: SystemsState,          // 卡片画廊
//!             pub users: UsersState,              // 用户列表 + 添加用户表单
//!             pub app_clients: AppClientsState,   // 客户端列表 + 客户端表单
//!             pub settings: SettingsState,
//!
//!             pub modal: ModalState,
//!             pub backend: ConsoleBackend,
//!             pub config_service: Box<dyn ConfigService>,
//!         }
//!
//!     App::tick 在每次循环末尾推进卡片过渡的时钟。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、外壳状态（ShellState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     sidebar    终端宽度低于断点时自动收起，展开时显示遮罩
//!     dropdowns  标题栏的 "pool" / "shortcuts" 两个下拉菜单，互斥展开
//!     profile    个人菜单，Sign out 跳到 Page::Landing
//!
//!     侧边栏收起时焦点固定在 Content（App::sync_focus）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举只保存焦点和错误信息，表单数据在页面状态里：
//!         - AddUser { focus, error }      → app.users.form
//!         - AppClient { focus, error }    → app.app_clients.form
//!         - Credentials(..)               创建成功后一次性展示密钥
//!         - ConfirmDelete { token, .. }   两步删除的第二步
//!         - Error / Help
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    AddUserField, AppClientField, AppClientsState, Modal, ModalState, SettingsState, ShellState,
    SystemsState, UsersState,
};
