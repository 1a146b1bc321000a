//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Update 层只和这里打交道，不直接接触 core 的异步接口：
//!
//!     ┌──────────┐   同步调用    ┌────────────────┐   block_on   ┌────────────────┐
//!     │  Update  │ ───────────▶ │ ConsoleBackend │ ───────────▶ │ ConsoleService │
//!     └──────────┘              └────────────────┘              └───────┬────────┘
//!                                                                       │
//!                                            RecordSource / SubmissionSink
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写
//!         mod console_backend;    // tokio 运行时 + ConsoleService
//!

mod config_service;
mod console_backend;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use console_backend::ConsoleBackend;
