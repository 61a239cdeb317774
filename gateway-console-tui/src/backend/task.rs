//! 后台任务
//!
//! Update 层返回 `Task`，主循环交给 `TaskRunner` 在 tokio 运行时上执行，
//! 结果通过无界通道以 `BackendMessage` 发回主循环。

use std::path::PathBuf;
use std::sync::Arc;

use gateway_console_core::state::PendingAction;
use gateway_console_core::types::{BalanceQuery, CommandKind, UploadKind};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use uuid::Uuid;

use super::config_service::{AppConfig, ConfigService};
use super::core_service::CoreService;
use crate::message::BackendMessage;

/// 上传进度通道容量
const PROGRESS_BUFFER: usize = 16;

/// 需要在后台执行的任务
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// 加载端口列表
    LoadPorts,
    /// 执行操作栏上的批量操作
    RunBulkAction(PendingAction),
    /// 下发 AT / USSD 指令
    SendCommand {
        request_id: Uuid,
        kind: CommandKind,
        terminals: Vec<String>,
        command: String,
    },
    /// 查询 SIM 卡余额
    QueryBalance {
        request_id: Uuid,
        query: BalanceQuery,
    },
    /// 加载 IMEI 列表
    LoadImei,
    /// 按模板改写 IMEI
    UpdateImei {
        request_id: Uuid,
        terminals: Vec<String>,
        template: String,
    },
    /// 读取本地文件并上传
    Upload { kind: UploadKind, path: PathBuf },
    /// 保存配置
    SaveConfig(AppConfig),
}

/// 任务执行器
pub struct TaskRunner {
    handle: Handle,
    core: Arc<CoreService>,
    config: Arc<dyn ConfigService>,
    tx: UnboundedSender<BackendMessage>,
}

impl TaskRunner {
    pub fn new(
        handle: Handle,
        core: Arc<CoreService>,
        config: Arc<dyn ConfigService>,
        tx: UnboundedSender<BackendMessage>,
    ) -> Self {
        Self {
            handle,
            core,
            config,
            tx,
        }
    }

    /// 在运行时上启动任务，不等待结果
    pub fn spawn(&self, task: Task) {
        tracing::debug!(?task, "spawning background task");
        let core = self.core.clone();
        let config = self.config.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let msg = execute(task, &core, config.as_ref(), &tx).await;
            if tx.send(msg).is_err() {
                tracing::debug!("UI loop has exited, dropping task result");
            }
        });
    }
}

/// 执行单个任务并返回结果消息
///
/// 上传过程中的进度消息直接经 `tx` 发出，且都先于返回的结束消息。
pub async fn execute(
    task: Task,
    core: &CoreService,
    config: &dyn ConfigService,
    tx: &UnboundedSender<BackendMessage>,
) -> BackendMessage {
    match task {
        Task::LoadPorts => {
            BackendMessage::PortsLoaded(core.ports().list_ports().await.map_err(|e| e.to_string()))
        }

        Task::RunBulkAction(pending) => {
            let result = core
                .ports()
                .run_bulk_action(&pending.action, &pending.ids)
                .await
                .map_err(|e| e.to_string());
            BackendMessage::BulkActionFinished {
                request_id: pending.request_id,
                result,
            }
        }

        Task::SendCommand {
            request_id,
            kind,
            terminals,
            command,
        } => {
            let result = core
                .commands()
                .send(kind, &terminals, &command)
                .await
                .map_err(|e| e.to_string());
            BackendMessage::CommandFinished {
                request_id,
                kind,
                result,
            }
        }

        Task::QueryBalance { request_id, query } => {
            let result = core
                .sim()
                .query_balance(&query)
                .await
                .map_err(|e| e.to_string());
            BackendMessage::BalancesLoaded { request_id, result }
        }

        Task::LoadImei => {
            BackendMessage::ImeiLoaded(core.imei().list_imei().await.map_err(|e| e.to_string()))
        }

        Task::UpdateImei {
            request_id,
            terminals,
            template,
        } => {
            let result = core
                .imei()
                .update_imei(&terminals, &template)
                .await
                .map_err(|e| e.to_string());
            BackendMessage::ImeiUpdated { request_id, result }
        }

        Task::Upload { kind, path } => {
            let result = upload_file(core, kind, path, tx).await;
            BackendMessage::UploadFinished { kind, result }
        }

        Task::SaveConfig(app_config) => {
            BackendMessage::ConfigSaved(config.save(&app_config).map_err(|e| e.to_string()))
        }
    }
}

async fn upload_file(
    core: &CoreService,
    kind: UploadKind,
    path: PathBuf,
    tx: &UnboundedSender<BackendMessage>,
) -> Result<(), String> {
    let data = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!(kind = kind.name(), bytes = data.len(), path = %path.display(), "uploading file");

    let (progress_tx, mut progress_rx) = mpsc::channel(PROGRESS_BUFFER);
    let forward = async {
        while let Some(progress) = progress_rx.recv().await {
            let _ = tx.send(BackendMessage::UploadProgress { kind, progress });
        }
    };

    let maintenance = core.maintenance();
    let (result, ()) = tokio::join!(maintenance.upload(kind, data, progress_tx), forward);
    result.map_err(|e| e.to_string())
}
