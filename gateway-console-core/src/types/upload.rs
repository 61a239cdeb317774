//! 固件 / 授权 / 备份上传

use serde::{Deserialize, Serialize};

/// 上传类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Firmware,
    License,
    Backup,
}

impl UploadKind {
    /// 单次上传的大小上限（字节）
    pub fn max_size(self) -> usize {
        match self {
            Self::Firmware => 64 * 1024 * 1024,
            Self::License => 64 * 1024,
            Self::Backup => 16 * 1024 * 1024,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Firmware => "firmware",
            Self::License => "license",
            Self::Backup => "backup",
        }
    }
}

/// 上传进度事件
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum UploadProgress {
    /// 开始传输
    Started { total: usize },
    /// 已传输字节数
    Transferred { sent: usize, total: usize },
    /// 设备校验中
    Verifying,
    /// 完成
    Completed,
}

impl UploadProgress {
    /// 进度百分比（0-100）
    pub fn percent(self) -> u16 {
        match self {
            Self::Started { .. } => 0,
            Self::Transferred { sent, total } => {
                if total == 0 {
                    100
                } else {
                    let pct = sent.saturating_mul(100) / total;
                    u16::try_from(pct.min(100)).unwrap_or(100)
                }
            }
            Self::Verifying | Self::Completed => 100,
        }
    }
}
