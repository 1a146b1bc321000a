//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = Page::from_nav(id);
                app.clear_status(); // 切换页面时清除状态消息

                // 窄布局下侧边栏是遮罩，选完页面就收起
                if app.shell.sidebar.is_narrow() {
                    app.shell.sidebar.close();
                    app.sync_focus();
                }
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }
    }
}
