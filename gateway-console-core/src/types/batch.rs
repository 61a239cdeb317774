//! 批量操作结果

use serde::{Deserialize, Serialize};

/// 单个 ID 的失败原因
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    /// 失败的端口/终端 ID
    pub id: String,
    /// 失败原因
    pub reason: String,
}

/// 批量操作结果（逐 ID）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperationResult {
    /// 成功的 ID
    pub succeeded: Vec<String>,
    /// 失败的 ID 及原因
    pub failures: Vec<BatchFailure>,
}

impl BatchOperationResult {
    /// 全部成功
    #[must_use]
    pub fn all_succeeded(ids: &[String]) -> Self {
        Self {
            succeeded: ids.to_vec(),
            failures: Vec::new(),
        }
    }

    /// 全部以同一原因失败
    #[must_use]
    pub fn all_failed(ids: &[String], reason: &str) -> Self {
        Self {
            succeeded: Vec::new(),
            failures: ids
                .iter()
                .map(|id| BatchFailure {
                    id: id.clone(),
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 失败的 ID 列表
    pub fn failed_ids(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.id.clone()).collect()
    }

    /// 合并另一批结果
    pub fn merge(&mut self, other: Self) {
        self.succeeded.extend(other.succeeded);
        self.failures.extend(other.failures);
    }

    /// 与请求的 ID 对齐
    ///
    /// 设备漏报的 ID 记为失败，未请求的 ID 被丢弃。
    #[must_use]
    pub fn reconcile(self, requested: &[String]) -> Self {
        let mut reconciled = Self::default();
        for id in requested {
            if let Some(failure) = self.failures.iter().find(|f| &f.id == id) {
                reconciled.failures.push(failure.clone());
            } else if self.succeeded.contains(id) {
                reconciled.succeeded.push(id.clone());
            } else {
                reconciled.failures.push(BatchFailure {
                    id: id.clone(),
                    reason: "no result reported by gateway".to_string(),
                });
            }
        }
        reconciled
    }
}
