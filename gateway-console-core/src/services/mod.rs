//! 业务逻辑服务层

mod command_service;
mod imei_service;
mod maintenance_service;
mod port_service;
mod sim_service;

pub use command_service::{validate_command, CommandService};
pub use imei_service::ImeiService;
pub use maintenance_service::MaintenanceService;
pub use port_service::PortService;
pub use sim_service::SimService;

pub use crate::utils::retry::CommandPolicy;

use std::future::Future;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult, GatewayResult};
use crate::traits::GatewayControlClient;
use crate::utils::retry::execute_with_retry;

/// 服务上下文 - 持有网关客户端与调用策略
///
/// 平台层创建此上下文并注入具体的客户端实现。
pub struct ServiceContext {
    /// 网关客户端
    pub client: Arc<dyn GatewayControlClient>,
    /// 超时与重试策略
    pub policy: CommandPolicy,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(client: Arc<dyn GatewayControlClient>, policy: CommandPolicy) -> Self {
        Self { client, policy }
    }

    /// 网关标识
    pub fn gateway_name(&self) -> &str {
        self.client.name()
    }

    /// 执行一次网关调用
    ///
    /// 非幂等操作（重启、删除、发送指令等）只尝试一次，但仍受超时约束。
    /// 失败时按 [`CoreError::is_expected`] 分级记录日志。
    pub async fn call<T, F, Fut>(&self, operation: &str, idempotent: bool, call: F) -> CoreResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = GatewayResult<T>>,
    {
        let policy = if idempotent {
            self.policy
        } else {
            self.policy.without_retry()
        };

        let result = execute_with_retry(&policy, operation, call).await;
        if let Err(e) = &result {
            log_failure(self.gateway_name(), operation, e);
        }
        result
    }
}

fn log_failure(gateway: &str, operation: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("[{gateway}] {operation} failed: {err}");
    } else {
        log::error!("[{gateway}] {operation} failed: {err}");
    }
}

/// 批量操作的前置校验
pub(crate) fn require_selection(ids: &[String]) -> CoreResult<()> {
    if ids.is_empty() {
        Err(CoreError::EmptySelection)
    } else {
        Ok(())
    }
}
