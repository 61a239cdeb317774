//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 侧边栏子消息处理
//!         mod content;            // 内容面板子消息处理（列表、批量操作）
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台任务结果处理
//!
//! ```text
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {...}
//!
//!
//!     需要访问网关时，update 不直接调用 Backend 层，而是返回一个 `Task`，
//!     由主循环交给 `TaskRunner` 在后台执行；结果以 `AppMessage::Backend` 回到这里。
//!     因此 update 始终是同步的，可以直接在测试中驱动。
//! ```
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod backend;
mod content;
mod modal;
mod navigation;

use gateway_console_core::CoreError;

use crate::backend::Task;
use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态；需要后台执行的操作以 `Task` 返回
pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::GoBack => {
            go_back(app);
            None
        }

        AppMessage::Refresh => {
            let page = app.current_page;
            load_task(app, page)
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ToggleLanguage => {
            let language = current_language().next();
            set_language(language);
            app.config.language = language.code().to_string();
            app.set_status(format!(
                "{}: {}",
                t().status.language_changed,
                language.display_name()
            ));
            Some(Task::SaveConfig(app.config.clone()))
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.next();
            set_theme(app.config.theme);
            app.set_status(t().status.theme_changed);
            Some(Task::SaveConfig(app.config.clone()))
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// Esc：关闭弹窗 → 清空当前页选择 → 焦点回到侧边栏
fn go_back(app: &mut App) {
    if let Some(modal) = &app.modal.active {
        if matches!(modal, Modal::EditPort { .. }) {
            app.ports.editor.cancel();
        }
        app.modal.close();
        app.clear_status();
        return;
    }

    if app.focus.is_content() && !content::dismiss_selection(app) {
        app.focus = FocusPanel::Navigation;
    }
}

/// 页面需要的数据加载任务
pub(crate) fn load_task(app: &mut App, page: Page) -> Option<Task> {
    match page {
        Page::Dashboard
        | Page::PortList
        | Page::SimCards
        | Page::GatewayStatus
        | Page::Ussd
        | Page::AtCommand => {
            if app.ports.loading {
                return None;
            }
            app.ports.loading = true;
            app.set_status(t().status.loading_ports);
            Some(Task::LoadPorts)
        }
        Page::Imei => {
            if app.imei.loading {
                return None;
            }
            app.imei.loading = true;
            app.set_status(t().common.loading);
            Some(Task::LoadImei)
        }
        Page::Firmware | Page::Backup | Page::License => None,
    }
}

/// 核心库错误在状态栏上的提示
pub(crate) fn error_status(err: &CoreError) -> String {
    match err {
        CoreError::EmptySelection => t().status.nothing_selected.to_string(),
        CoreError::Busy(_) => t().status.action_busy.to_string(),
        other => other.to_string(),
    }
}
