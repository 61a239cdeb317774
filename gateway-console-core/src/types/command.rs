//! AT / USSD 指令相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 指令类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// AT 指令，直接发给模块
    At,
    /// USSD 会话（如余额查询 *100#）
    Ussd,
}

impl CommandKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::At => "AT",
            Self::Ussd => "USSD",
        }
    }
}

/// 终端响应状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// 已下发，等待响应
    Pending,
    /// 成功
    Success,
    /// 失败（超时、设备拒绝等）
    Failed,
}

/// 单个终端的指令响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TerminalResponse {
    /// 终端地址
    pub terminal: String,
    /// 状态
    pub status: ResponseStatus,
    /// 响应内容（失败时为原因）
    pub content: String,
    /// 响应时间
    pub timestamp: DateTime<Utc>,
}

impl TerminalResponse {
    pub fn success(terminal: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            status: ResponseStatus::Success,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn failed(terminal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            status: ResponseStatus::Failed,
            content: reason.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn pending(terminal: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            status: ResponseStatus::Pending,
            content: String::new(),
            timestamp: Utc::now(),
        }
    }
}
