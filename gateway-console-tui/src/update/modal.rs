//! 弹窗消息处理

use std::path::PathBuf;

use gateway_console_core::state::BulkAction;
use gateway_console_core::types::BalanceQuery;
use gateway_console_core::CoreError;

use super::content::{query_balance, start_bulk};
use super::error_status;
use crate::backend::Task;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Task> {
    let modal = app.modal.active.as_ref()?;

    match modal {
        Modal::Help | Modal::Error { .. } => {
            handle_simple_modal(app, msg);
            None
        }
        Modal::ConfirmBulk { .. } => handle_confirm_bulk(app, msg),
        Modal::EditPort { .. } => {
            handle_edit_port(app, msg);
            None
        }
        Modal::ApplyPolicy(_)
        | Modal::ImeiTemplate(_)
        | Modal::CommandInput { .. }
        | Modal::OperatorQuery(_)
        | Modal::UploadPath { .. } => handle_text_modal(app, msg),
    }
}

/// 帮助 / 错误弹窗：Enter 或 Esc 关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

/// 批量操作确认弹窗
fn handle_confirm_bulk(app: &mut App, msg: ModalMessage) -> Option<Task> {
    let Some(Modal::ConfirmBulk { action, focus, .. }) = app.modal.active.as_mut() else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }
        ModalMessage::NextField => {
            *focus = (*focus + 1) % 2;
            None
        }
        ModalMessage::Input('y' | 'Y') => {
            let action = action.clone();
            app.modal.close();
            start_bulk(app, action)
        }
        ModalMessage::Confirm => {
            let confirmed = (*focus == 1).then(|| action.clone());
            app.modal.close();
            confirmed.and_then(|action| start_bulk(app, action))
        }
        ModalMessage::Input(_) | ModalMessage::Backspace => None,
    }
}

/// 端口编辑弹窗：直接编辑 `PortsState::editor` 中的草稿
fn handle_edit_port(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.ports.editor.cancel();
            app.modal.close();
        }
        ModalMessage::Input(c) => {
            if let Some(draft) = app.ports.editor.draft_mut() {
                draft.name.push(c);
            }
            set_edit_error(app, None);
        }
        ModalMessage::Backspace => {
            if let Some(draft) = app.ports.editor.draft_mut() {
                draft.name.pop();
            }
            set_edit_error(app, None);
        }
        ModalMessage::Confirm => {
            let Some(draft) = app.ports.editor.draft_mut() else {
                app.modal.close();
                return;
            };
            let trimmed = draft.name.trim().to_string();
            if trimmed.is_empty() {
                set_edit_error(app, Some(t().modal.input_required.to_string()));
                return;
            }
            draft.name = trimmed;

            app.modal.close();
            if let Some(port) = app.ports.commit_editor() {
                app.set_status(format!(
                    "{}: {} → {}",
                    t().status.port_renamed,
                    port.id,
                    port.name
                ));
            }
        }
        ModalMessage::NextField => {}
    }
}

fn set_edit_error(app: &mut App, message: Option<String>) {
    if let Some(Modal::EditPort { error }) = app.modal.active.as_mut() {
        *error = message;
    }
}

/// 单输入框弹窗
fn handle_text_modal(app: &mut App, msg: ModalMessage) -> Option<Task> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }
        ModalMessage::Input(c) => {
            if let Some(input) = app.modal.active.as_mut().and_then(Modal::input_mut) {
                input.push(c);
            }
            None
        }
        ModalMessage::Backspace => {
            if let Some(input) = app.modal.active.as_mut().and_then(Modal::input_mut) {
                input.pop();
            }
            None
        }
        ModalMessage::NextField => None,
        ModalMessage::Confirm => submit_text_modal(app),
    }
}

/// 提交输入：校验失败时弹窗保持打开并显示错误
fn submit_text_modal(app: &mut App) -> Option<Task> {
    let mut modal = app.modal.active.take()?;
    let Some(value) = modal
        .input_mut()
        .and_then(|input| input.trimmed().map(str::to_string))
    else {
        if let Some(input) = modal.input_mut() {
            input.error = Some(t().modal.input_required.to_string());
        }
        app.modal.show(modal);
        return None;
    };

    let submitted = match &modal {
        Modal::ApplyPolicy(_) => Ok(start_bulk(app, BulkAction::ApplyPolicy(value))),

        Modal::ImeiTemplate(_) => app.imei.begin_update(&value).map(|request| {
            app.set_status(t().common.loading);
            Some(Task::UpdateImei {
                request_id: request.request_id,
                terminals: request.terminals,
                template: request.template,
            })
        }),

        Modal::CommandInput { kind, .. } => {
            let kind = *kind;
            app.commands_mut(kind).begin(&value).map(|request| {
                app.set_status(t().status.command_sending);
                Some(Task::SendCommand {
                    request_id: request.request_id,
                    kind: request.kind,
                    terminals: request.terminals,
                    command: request.command,
                })
            })
        }

        Modal::OperatorQuery(_) => Ok(query_balance(app, &BalanceQuery::Operator(value))),

        Modal::UploadPath { kind, .. } => {
            let kind = *kind;
            let path = PathBuf::from(&value);
            if path.is_file() {
                app.maintenance.get_mut(kind).begin(path.clone()).map(|()| {
                    app.set_status(t().status.upload_started);
                    Some(Task::Upload { kind, path })
                })
            } else {
                Err(CoreError::ValidationError(format!(
                    "{value}: not a file"
                )))
            }
        }

        Modal::Help | Modal::Error { .. } | Modal::ConfirmBulk { .. } | Modal::EditPort { .. } => {
            Ok(None)
        }
    };

    match submitted {
        Ok(task) => task,
        Err(e) => {
            if let Some(input) = modal.input_mut() {
                input.error = Some(error_status(&e));
            }
            app.modal.show(modal);
            None
        }
    }
}
