//! 后台任务结果处理

use gateway_console_core::state::ActionOutcome;

use crate::backend::Task;
use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台任务结果；操作完成后可能需要重新加载数据
pub fn update(app: &mut App, msg: BackendMessage) -> Option<Task> {
    match msg {
        BackendMessage::PortsLoaded(Ok(ports)) => {
            let count = ports.len();
            app.ports.set_ports(ports);
            app.sync_terminals();
            app.set_status(format!("{count} {}", t().status.ports_loaded));
            None
        }
        BackendMessage::PortsLoaded(Err(e)) => {
            app.ports.loading = false;
            app.ports.error = Some(e.clone());
            app.set_status(e);
            None
        }

        BackendMessage::BulkActionFinished {
            request_id,
            result: Ok(result),
        } => {
            let outcome = app
                .ports
                .action_bar
                .finish(request_id, &result, &mut app.ports.selection);
            match outcome {
                ActionOutcome::Stale => return None,
                ActionOutcome::Cleared => app.set_status(format!(
                    "{} ({})",
                    t().status.action_done,
                    result.success_count()
                )),
                ActionOutcome::PartiallyFailed { failed } => app.set_status(format!(
                    "{} ({failed}/{})",
                    t().status.action_partial,
                    failed + result.success_count()
                )),
                ActionOutcome::Unchanged => app.set_status(t().status.action_failed),
            }
            reload_ports(app)
        }
        BackendMessage::BulkActionFinished {
            request_id,
            result: Err(e),
        } => {
            if app.ports.action_bar.fail(request_id) != ActionOutcome::Stale {
                app.set_status(t().status.action_failed);
                app.modal.show_error(t().modal.error_title, &e);
            }
            None
        }

        BackendMessage::CommandFinished {
            request_id,
            kind,
            result,
        } => {
            let state = app.commands_mut(kind);
            let applied = match result {
                Ok(responses) => state.finish(request_id, responses),
                Err(e) => state.fail(request_id, &e),
            };
            if applied {
                let (ok, failed) = app.commands(kind).summary();
                app.set_status(format!(
                    "{}: {ok} {}, {failed} {}",
                    t().status.command_done,
                    t().commands.success,
                    t().commands.failed
                ));
            }
            None
        }

        BackendMessage::BalancesLoaded { request_id, result } => {
            match result {
                Ok(balances) => {
                    if let Some(count) = app.sim.finish(request_id, balances) {
                        app.set_status(format!("{} ({count})", t().status.balance_loaded));
                    }
                }
                Err(e) => {
                    if app.sim.fail(request_id, e.clone()) {
                        app.set_status(e);
                    }
                }
            }
            None
        }

        BackendMessage::ImeiLoaded(Ok(records)) => {
            app.imei.set_records(records);
            app.clear_status();
            None
        }
        BackendMessage::ImeiLoaded(Err(e)) => {
            app.imei.loading = false;
            app.imei.error = Some(e.clone());
            app.set_status(e);
            None
        }

        BackendMessage::ImeiUpdated {
            request_id,
            result: Ok(result),
        } => {
            if !app.imei.finish(request_id, &result) {
                return None;
            }
            if result.is_complete_success() {
                app.set_status(format!(
                    "{} ({})",
                    t().status.imei_updated,
                    result.success_count()
                ));
            } else {
                app.set_status(format!(
                    "{} ({}/{})",
                    t().status.action_partial,
                    result.failed_count(),
                    result.failed_count() + result.success_count()
                ));
            }
            app.imei.loading = true;
            Some(Task::LoadImei)
        }
        BackendMessage::ImeiUpdated {
            request_id,
            result: Err(e),
        } => {
            if app.imei.fail(request_id, e.clone()) {
                app.modal.show_error(t().modal.error_title, &e);
            }
            None
        }

        BackendMessage::UploadProgress { kind, progress } => {
            app.maintenance.get_mut(kind).on_progress(progress);
            None
        }
        BackendMessage::UploadFinished { kind, result } => {
            if let Err(e) = &result {
                app.modal.show_error(t().modal.error_title, e);
            } else {
                app.set_status(t().status.upload_done);
            }
            app.maintenance.get_mut(kind).finish(result);
            None
        }

        BackendMessage::ConfigSaved(Ok(())) => {
            tracing::debug!("config saved");
            None
        }
        BackendMessage::ConfigSaved(Err(e)) => {
            tracing::warn!(error = %e, "failed to save config");
            app.set_status(format!("{}: {e}", t().status.config_save_failed));
            None
        }
    }
}

/// 批量操作后重新加载端口（已在加载中则跳过）
fn reload_ports(app: &mut App) -> Option<Task> {
    if app.ports.loading {
        return None;
    }
    app.ports.loading = true;
    Some(Task::LoadPorts)
}
