//! 端口相关类型定义

use serde::{Deserialize, Serialize};

/// 端口状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// 在线，已注册到运营商网络
    Online,
    /// 离线（无 SIM 或无信号）
    #[default]
    Offline,
    /// 已被管理员禁用
    Disabled,
    /// 重启中
    Rebooting,
    /// 模块故障
    Error,
}

impl PortStatus {
    /// 端口是否处于可下发指令的状态
    pub fn is_usable(self) -> bool {
        matches!(self, Self::Online)
    }
}

/// 端口信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    /// 端口 ID（如 "M1"）
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 终端（SIM 卡槽）地址，如 "M1T1"
    pub terminal: String,
    /// 模块型号
    pub model: String,
    /// 当前 IMEI
    pub imei: String,
    /// 端口状态
    pub status: PortStatus,
}
