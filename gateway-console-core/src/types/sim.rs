//! SIM 卡余额查询类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 余额查询范围
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum BalanceQuery {
    /// 指定终端
    Terminals(Vec<String>),
    /// 指定运营商下的全部 SIM 卡
    Operator(String),
}

impl BalanceQuery {
    /// 查询范围是否为空
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Terminals(ids) => ids.is_empty(),
            Self::Operator(name) => name.trim().is_empty(),
        }
    }
}

/// 单张 SIM 卡余额
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimBalance {
    /// 终端地址
    pub terminal: String,
    /// 运营商
    pub operator: String,
    /// 本机号码（运营商未返回时为空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// 余额
    pub balance: f64,
    /// 币种
    pub currency: String,
    /// 查询时间
    pub queried_at: DateTime<Utc>,
}
