//! 内容面板消息处理

use gateway_console_core::state::{BulkAction, SelectionState};
use gateway_console_core::types::BalanceQuery;

use super::error_status;
use crate::backend::Task;
use crate::i18n::{bulk_action_label, t};
use crate::message::ContentMessage;
use crate::model::state::{ListCursor, Modal, TextInput};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Task> {
    match msg {
        ContentMessage::SelectPrevious => {
            if let Some((cursor, _)) = cursor_mut(app) {
                cursor.previous();
            }
        }
        ContentMessage::SelectNext => {
            if let Some((cursor, len)) = cursor_mut(app) {
                cursor.next(len);
            }
        }
        ContentMessage::SelectFirst => {
            if let Some((cursor, _)) = cursor_mut(app) {
                cursor.first();
            }
        }
        ContentMessage::SelectLast => {
            if let Some((cursor, len)) = cursor_mut(app) {
                cursor.last(len);
            }
        }

        ContentMessage::ToggleRow => toggle_row(app),

        ContentMessage::SelectAll => {
            if let Some(selection) = selection_mut(app) {
                selection.select_all();
            }
        }

        ContentMessage::ClearSelection => {
            dismiss_selection(app);
        }

        ContentMessage::Confirm => return confirm(app),

        ContentMessage::Edit => open_editor(app),

        ContentMessage::Bulk(action) => return request_bulk(app, action),

        ContentMessage::ApplyPolicy => {
            if ready_for_bulk(app) {
                app.modal.show(Modal::ApplyPolicy(TextInput::default()));
            }
        }
    }
    None
}

/// 当前页面的光标及行数
fn cursor_mut(app: &mut App) -> Option<(&mut ListCursor, usize)> {
    match app.current_page {
        Page::PortList | Page::GatewayStatus => {
            Some((&mut app.ports.cursor, app.ports.ports.len()))
        }
        Page::SimCards => Some((&mut app.sim.cursor, app.sim.selection.all_ids().len())),
        Page::Imei => Some((&mut app.imei.cursor, app.imei.records.len())),
        Page::Ussd => Some((&mut app.ussd.cursor, app.ussd.selection.all_ids().len())),
        Page::AtCommand => Some((&mut app.at.cursor, app.at.selection.all_ids().len())),
        Page::Dashboard | Page::Firmware | Page::Backup | Page::License => None,
    }
}

/// 当前页面的批量选择
fn selection_mut(app: &mut App) -> Option<&mut SelectionState<String>> {
    match app.current_page {
        Page::PortList => Some(&mut app.ports.selection),
        Page::SimCards => Some(&mut app.sim.selection),
        Page::Imei => Some(&mut app.imei.selection),
        Page::Ussd => Some(&mut app.ussd.selection),
        Page::AtCommand => Some(&mut app.at.selection),
        _ => None,
    }
}

fn toggle_row(app: &mut App) {
    match app.current_page {
        Page::PortList => {
            app.ports.toggle_current();
        }
        Page::SimCards => {
            app.sim.toggle_current();
        }
        Page::Imei => {
            app.imei.toggle_current();
        }
        Page::Ussd => {
            app.ussd.toggle_current();
        }
        Page::AtCommand => {
            app.at.toggle_current();
        }
        _ => {}
    }
}

/// 清空当前页选择（关闭操作栏），返回是否有选择被清空
///
/// 端口批量操作进行中时操作栏不可关闭。
pub(super) fn dismiss_selection(app: &mut App) -> bool {
    if app.current_page == Page::PortList {
        if !app.ports.selection.any_selected() {
            return false;
        }
        if !app.ports.action_bar.dismiss(&mut app.ports.selection) {
            app.set_status(t().status.action_busy);
        }
        return true;
    }

    match selection_mut(app) {
        Some(selection) if selection.any_selected() => {
            selection.clear();
            true
        }
        _ => false,
    }
}

/// 进入页面时清空该页的选择；有进行中的请求时保留，结果回来后按失败项处理
pub(super) fn reset_selection(app: &mut App, page: Page) {
    match page {
        Page::PortList => {
            app.ports.action_bar.dismiss(&mut app.ports.selection);
        }
        Page::SimCards if !app.sim.is_busy() => app.sim.selection.clear(),
        Page::Imei if !app.imei.is_busy() => app.imei.selection.clear(),
        Page::Ussd if !app.ussd.is_busy() => app.ussd.selection.clear(),
        Page::AtCommand if !app.at.is_busy() => app.at.selection.clear(),
        _ => {}
    }
}

fn open_editor(app: &mut App) {
    if app.current_page == Page::PortList && app.ports.open_editor() {
        app.modal.show(Modal::EditPort { error: None });
    }
}

/// Enter：页面主操作
fn confirm(app: &mut App) -> Option<Task> {
    match app.current_page {
        Page::PortList => open_editor(app),

        Page::SimCards => {
            if app.sim.is_busy() {
                app.set_status(t().status.action_busy);
            } else if let Ok(query) = app.sim.selected_query() {
                return query_balance(app, &query);
            } else {
                app.modal.show(Modal::OperatorQuery(TextInput::default()));
            }
        }

        Page::Imei => {
            if app.imei.is_busy() {
                app.set_status(t().status.action_busy);
            } else if !app.imei.selection.any_selected() {
                app.set_status(t().status.nothing_selected);
            } else {
                app.modal.show(Modal::ImeiTemplate(TextInput::default()));
            }
        }

        Page::Ussd | Page::AtCommand => {
            let kind = app.current_page.command_kind()?;
            let state = app.commands(kind);
            if state.is_busy() {
                app.set_status(t().status.action_busy);
            } else if !state.selection.any_selected() {
                app.set_status(t().status.nothing_selected);
            } else {
                let last = state.last_command.clone().unwrap_or_default();
                app.modal.show(Modal::CommandInput {
                    kind,
                    input: TextInput::new(last),
                });
            }
        }

        Page::Firmware | Page::Backup | Page::License => {
            let kind = app.current_page.upload_kind()?;
            let upload = app.maintenance.get(kind);
            if upload.is_busy() {
                app.set_status(t().status.action_busy);
            } else {
                let last = upload
                    .last_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                app.modal.show(Modal::UploadPath {
                    kind,
                    input: TextInput::new(last),
                });
            }
        }

        Page::Dashboard | Page::GatewayStatus => {}
    }
    None
}

/// 提交余额查询
pub(super) fn query_balance(app: &mut App, query: &BalanceQuery) -> Option<Task> {
    match app.sim.begin_query(query) {
        Ok(request_id) => {
            app.set_status(t().common.loading);
            Some(Task::QueryBalance {
                request_id,
                query: query.clone(),
            })
        }
        Err(e) => {
            app.set_status(error_status(&e));
            None
        }
    }
}

/// 操作栏是否可以发起新操作（否则在状态栏提示原因）
fn ready_for_bulk(app: &mut App) -> bool {
    if app.current_page != Page::PortList {
        return false;
    }
    if app.ports.action_bar.is_busy() {
        app.set_status(t().status.action_busy);
        return false;
    }
    if !app.ports.selection.any_selected() {
        app.set_status(t().status.nothing_selected);
        return false;
    }
    true
}

/// 操作栏按钮：破坏性操作先确认
fn request_bulk(app: &mut App, action: BulkAction) -> Option<Task> {
    if !ready_for_bulk(app) {
        return None;
    }
    if action.is_destructive() {
        let count = app.ports.selection.count();
        app.modal.show_confirm_bulk(action, count);
        return None;
    }
    start_bulk(app, action)
}

/// 提交批量操作
pub(super) fn start_bulk(app: &mut App, action: BulkAction) -> Option<Task> {
    let label = bulk_action_label(&action);
    match app.ports.action_bar.begin(action, &app.ports.selection) {
        Ok(pending) => {
            app.set_status(format!(
                "{} {label} ({})...",
                t().status.action_running,
                pending.ids.len()
            ));
            Some(Task::RunBulkAction(pending))
        }
        Err(e) => {
            app.set_status(error_status(&e));
            None
        }
    }
}
