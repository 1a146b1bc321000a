//! 应用主状态结构

use anyhow::{Context, Result};

use super::{
    AppClientsState, FocusPanel, ModalState, NavigationState, Page, SettingsState, ShellState,
    SystemsState, UsersState,
};
use crate::backend::{AppConfig, ConfigService, ConsoleBackend};
use crate::i18n::{self, t};
use crate::view::theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 侧边栏与标题栏菜单
    pub shell: ShellState,

    // === 各页面状态 ===
    /// 系统卡片页面状态
    pub systems: SystemsState,
    /// 用户页面状态
    pub users: UsersState,
    /// App Client 页面状态
    pub app_clients: AppClientsState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    // === 后端 ===
    pub backend: ConsoleBackend,
    pub config_service: Box<dyn ConfigService>,
}

impl App {
    /// 加载数据并按配置创建应用状态
    pub fn new(
        backend: ConsoleBackend,
        config_service: Box<dyn ConfigService>,
        config: &AppConfig,
        width: u16,
    ) -> Result<Self> {
        let data = backend.load().context("failed to load console data")?;
        let settings = SettingsState::from_config(config);

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            shell: ShellState::new(width, settings.breakpoint),
            systems: SystemsState::new(data.gallery),
            users: UsersState::new(data.users),
            app_clients: AppClientsState::new(data.app_clients),
            settings,
            modal: ModalState::new(),
            backend,
            config_service,
        };
        app.apply_settings();
        app.sync_focus();

        Ok(app)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 推进卡片过渡的虚拟时钟；被丢弃的过滤请求在稳定后补做一次
    pub fn tick(&mut self, elapsed_ms: u64) {
        let gallery = &mut self.systems.gallery;
        gallery.advance(elapsed_ms);
        if gallery.is_stale() && !gallery.is_settling() {
            gallery.refresh();
        }
    }

    /// 终端宽度变化
    pub fn resize(&mut self, width: u16) {
        self.shell.sidebar.resize(width);
        self.sync_focus();
    }

    /// 侧边栏关闭时焦点不能停在导航面板
    pub fn sync_focus(&mut self) {
        if !self.shell.sidebar.is_open() {
            self.focus = FocusPanel::Content;
        }
    }

    /// 把设置应用到全局主题 / 语言 / 侧边栏断点
    pub fn apply_settings(&mut self) {
        theme::set_theme(self.settings.theme);
        i18n::set_language(self.settings.language);
        self.shell.sidebar.set_breakpoint(self.settings.breakpoint);
        self.sync_focus();
    }

    /// 应用并保存设置
    pub fn save_settings(&mut self) {
        self.apply_settings();
        if let Err(e) = self.config_service.save(&self.settings.to_config()) {
            tracing::error!("Failed to save config: {e:#}");
            self.set_status(t().status.config_failed);
        }
    }
}
