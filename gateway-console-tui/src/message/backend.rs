//! 后台任务完成消息
//!
//! 每个后台任务结束时发送一条消息回主循环。
//! 错误以显示文本传递，日志已在核心库中按级别记录。

use gateway_console_core::types::{
    BatchOperationResult, CommandKind, ImeiRecord, Port, SimBalance, TerminalResponse,
    UploadKind, UploadProgress,
};
use uuid::Uuid;

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 端口列表加载完成
    PortsLoaded(Result<Vec<Port>, String>),

    /// 批量操作完成
    BulkActionFinished {
        request_id: Uuid,
        result: Result<BatchOperationResult, String>,
    },

    /// AT / USSD 指令完成
    CommandFinished {
        request_id: Uuid,
        kind: CommandKind,
        result: Result<Vec<TerminalResponse>, String>,
    },

    /// 余额查询完成
    BalancesLoaded {
        request_id: Uuid,
        result: Result<Vec<SimBalance>, String>,
    },

    /// IMEI 列表加载完成
    ImeiLoaded(Result<Vec<ImeiRecord>, String>),

    /// IMEI 改写完成
    ImeiUpdated {
        request_id: Uuid,
        result: Result<BatchOperationResult, String>,
    },

    /// 上传进度
    UploadProgress {
        kind: UploadKind,
        progress: UploadProgress,
    },

    /// 上传结束
    UploadFinished {
        kind: UploadKind,
        result: Result<(), String>,
    },

    /// 配置保存完成
    ConfigSaved(Result<(), String>),
}
