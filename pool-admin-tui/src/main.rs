//! Pool Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Pool Admin TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::from_default_dir()  // 定位配置目录
//!     init_logging()                          // 日志写入配置目录下的文件
//!     ConsoleBackend::new()                   // 创建 tokio 运行时与 ConsoleService
//!     init_terminal()                         // 初始化终端
//!     model::App::new()                       // 加载数据、创建 APP 实例
//!     app::run()                              // 运行 app.rs 主循环
//!     restore_terminal()                      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 为什么日志不写 stdout？
//!     终端处于备用屏幕 + 原始模式，任何写到 stdout 的内容都会破坏界面，
//!     所以 tracing 的输出被重定向到 `<config_dir>/pool-admin/pool-admin.log`。
//!     core 使用 `log` 门面打日志，`init()` 会同时安装 LogTracer，
//!     把这些记录桥接到 tracing。
//!
//!     日志级别通过 RUST_LOG 控制，默认 info。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
#[cfg(test)]
mod test_utils;
mod update;
mod util;
mod view;

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{ConfigService, ConsoleBackend, LocalConfigService};
use util::{init_terminal, restore_terminal};

const LOG_FILE: &str = "pool-admin.log";

fn main() -> Result<(), anyhow::Error> {
    // 1. 配置与日志
    let config_service = LocalConfigService::from_default_dir()?;
    init_logging(config_service.dir())?;

    let config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });

    // 2. 后端服务
    let backend = ConsoleBackend::new()?;

    // 3. 初始化终端
    let mut terminal = init_terminal()?;
    let width = terminal.size().map(|size| size.width).unwrap_or_default();

    // 4. 创建应用实例并运行主循环
    let result = model::App::new(backend, Box::new(config_service), &config, width)
        .and_then(|mut app| app::run(&mut terminal, &mut app));

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 初始化 tracing，输出到配置目录下的日志文件
fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .context("failed to open log file")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Pool Admin TUI");
    Ok(())
}
