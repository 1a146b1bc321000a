//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Systems , Users , App Clients , Settings],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Systems,                   // 默认显示系统卡片页
//!     status_message = None,                          // 状态栏消息
//!     shell: ShellState { sidebar, dropdowns, profile },
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     app.tick(elapsed)                               // 推进卡片过渡的虚拟时钟
//! }
//!
//! 卡片的 Entering / Leaving 过渡不依赖任何定时器，
//! 每轮循环把真实流逝的毫秒数交给 Gallery::advance，到期的过渡在此落地。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 同步卡片可见性并渲染 UI
        let size = terminal.size()?;
        app.systems.sync_visibility(view::layout::page_body_height(size.height));
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 推进虚拟时钟
        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        app.tick(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    }

    Ok(())
}
