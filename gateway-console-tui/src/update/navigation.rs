//! 侧边栏消息处理

use crate::backend::Task;
use crate::message::NavigationMessage;
use crate::model::{App, Page, SidebarAction};

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Task> {
    match msg {
        NavigationMessage::SelectPrevious => app.sidebar.select_previous(),
        NavigationMessage::SelectNext => app.sidebar.select_next(),
        NavigationMessage::SelectFirst => app.sidebar.select_first(),
        NavigationMessage::SelectLast => app.sidebar.select_last(),

        NavigationMessage::Confirm => {
            if let Some(SidebarAction::Open(path)) = app.sidebar.confirm() {
                return open_path(app, &path);
            }
        }
    }
    None
}

/// 导航到路由并切换页面，返回该页面的加载任务
pub(crate) fn open_path(app: &mut App, path: &str) -> Option<Task> {
    let resolved = app.sidebar.navigate(path);
    let page = Page::from_path(&resolved)?;
    if page != app.current_page {
        super::content::reset_selection(app, page);
    }
    app.current_page = page;
    app.clear_status(); // 切换页面时清除状态消息
    super::load_task(app, page)
}
