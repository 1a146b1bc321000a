//! 测试辅助

use tempfile::TempDir;

use crate::backend::{AppConfig, ConsoleBackend, LocalConfigService};
use crate::model::App;

/// 足够宽、侧边栏默认展开的终端宽度
pub const WIDE: u16 = 160;

/// 使用示例数据和临时配置目录创建 App；`TempDir` 需要和 App 活得一样久
pub fn app() -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let backend = ConsoleBackend::new().unwrap();
    let config_service = LocalConfigService::new(dir.path());
    let app = App::new(
        backend,
        Box::new(config_service),
        &AppConfig::default(),
        WIDE,
    )
    .unwrap();
    (app, dir)
}
