//! 设置页面状态

use crate::backend::AppConfig;
use crate::i18n::Language;
use crate::view::theme::Theme;

/// 断点调整步长（列）
const BREAKPOINT_STEP: u16 = 10;
/// 断点可选范围
const BREAKPOINT_RANGE: (u16, u16) = (60, 200);

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
    Breakpoint,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language, SettingItem::Breakpoint]
    }
}

/// 设置页面状态
#[derive(Debug)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub language: Language,
    /// 侧边栏断点（终端列数）
    pub breakpoint: u16,
}

impl SettingsState {
    /// 从配置文件内容创建
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            selected_index: 0,
            theme: config.theme,
            language: Language::from_code(&config.language).unwrap_or_default(),
            breakpoint: config
                .breakpoint_columns
                .clamp(BREAKPOINT_RANGE.0, BREAKPOINT_RANGE.1),
        }
    }

    /// 转换回配置文件内容
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            theme: self.theme,
            language: self.language.code().to_string(),
            breakpoint_columns: self.breakpoint,
        }
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = SettingItem::all().len() - 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::all().len();
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项的值；`forward` 为 false 时反向
    pub fn toggle(&mut self, forward: bool) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Language) => self.language = self.language.next(),
            Some(SettingItem::Breakpoint) => {
                self.breakpoint = if forward {
                    self.breakpoint.saturating_add(BREAKPOINT_STEP)
                } else {
                    self.breakpoint.saturating_sub(BREAKPOINT_STEP)
                }
                .clamp(BREAKPOINT_RANGE.0, BREAKPOINT_RANGE.1);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            breakpoint_columns: 120,
        };
        assert_eq!(SettingsState::from_config(&config).to_config(), config);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(SettingsState::from_config(&config).language, Language::EnUs);
    }

    #[test]
    fn breakpoint_is_clamped() {
        let mut settings = SettingsState::from_config(&AppConfig::default());
        settings.selected_index = 2;
        for _ in 0..20 {
            settings.toggle(true);
        }
        assert_eq!(settings.breakpoint, 200);
        for _ in 0..20 {
            settings.toggle(false);
        }
        assert_eq!(settings.breakpoint, 60);
    }

    #[test]
    fn selection_wraps() {
        let mut settings = SettingsState::from_config(&AppConfig::default());
        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::Breakpoint));
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));
    }
}
