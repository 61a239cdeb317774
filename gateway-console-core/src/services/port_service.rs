//! 端口管理服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{require_selection, ServiceContext};
use crate::state::BulkAction;
use crate::types::{BatchOperationResult, Port};

/// 端口管理服务
pub struct PortService {
    ctx: Arc<ServiceContext>,
}

impl PortService {
    /// 创建端口服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取全部端口
    pub async fn list_ports(&self) -> CoreResult<Vec<Port>> {
        let ports = self
            .ctx
            .call("list_ports", true, || self.ctx.client.list_ports())
            .await?;
        log::debug!("[{}] Loaded {} port(s)", self.ctx.gateway_name(), ports.len());
        Ok(ports)
    }

    /// 启用或禁用端口
    pub async fn set_enabled(
        &self,
        ids: &[String],
        enabled: bool,
    ) -> CoreResult<BatchOperationResult> {
        require_selection(ids)?;
        let operation = if enabled { "enable_ports" } else { "disable_ports" };
        let result = self
            .ctx
            .call(operation, true, || self.ctx.client.set_port_enabled(ids, enabled))
            .await?;
        Ok(result.reconcile(ids))
    }

    /// 重启端口模块
    pub async fn reboot(&self, ids: &[String]) -> CoreResult<BatchOperationResult> {
        require_selection(ids)?;
        let result = self
            .ctx
            .call("reboot_ports", false, || self.ctx.client.reboot_ports(ids))
            .await?;
        Ok(result.reconcile(ids))
    }

    /// 删除端口配置
    pub async fn delete(&self, ids: &[String]) -> CoreResult<BatchOperationResult> {
        require_selection(ids)?;
        let result = self
            .ctx
            .call("delete_ports", false, || self.ctx.client.delete_ports(ids))
            .await?;
        Ok(result.reconcile(ids))
    }

    /// 为端口应用策略模板
    pub async fn apply_policy(
        &self,
        ids: &[String],
        policy: &str,
    ) -> CoreResult<BatchOperationResult> {
        require_selection(ids)?;
        let policy = policy.trim();
        if policy.is_empty() {
            return Err(CoreError::ValidationError(
                "policy name must not be empty".to_string(),
            ));
        }
        let result = self
            .ctx
            .call("apply_policy", true, || self.ctx.client.apply_policy(ids, policy))
            .await?;
        Ok(result.reconcile(ids))
    }

    /// 执行操作栏上的批量操作
    pub async fn run_bulk_action(
        &self,
        action: &BulkAction,
        ids: &[String],
    ) -> CoreResult<BatchOperationResult> {
        let result = match action {
            BulkAction::Enable => self.set_enabled(ids, true).await,
            BulkAction::Disable => self.set_enabled(ids, false).await,
            BulkAction::Reboot => self.reboot(ids).await,
            BulkAction::Delete => self.delete(ids).await,
            BulkAction::ApplyPolicy(policy) => self.apply_policy(ids, policy).await,
        }?;

        if result.is_complete_success() {
            log::info!(
                "[{}] {} succeeded on {} port(s)",
                self.ctx.gateway_name(),
                action.name(),
                result.success_count()
            );
        } else {
            log::warn!(
                "[{}] {} partially failed: {} ok, {} failed ({:?})",
                self.ctx.gateway_name(),
                action.name(),
                result.success_count(),
                result.failed_count(),
                result.failed_ids()
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::test_utils::{create_test_context, ids, MockGatewayClient};

    fn service(mock: MockGatewayClient) -> (Arc<MockGatewayClient>, PortService) {
        let (mock, ctx) = create_test_context(mock);
        (mock, PortService::new(ctx))
    }

    #[tokio::test]
    async fn list_ports_returns_seeded_ports() {
        let (_, svc) = service(MockGatewayClient::with_ports(&["M1", "M2"]));
        let ports = svc.list_ports().await.unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].id, "M1");
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_before_calling_gateway() {
        let (mock, svc) = service(MockGatewayClient::with_ports(&["M1"]));
        let result = svc.reboot(&[]).await;
        assert!(matches!(result, Err(CoreError::EmptySelection)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn per_port_failures_are_reported() {
        let mock = MockGatewayClient::with_ports(&["M1", "M2", "M3"]).fail_port("M2");
        let (_, svc) = service(mock);

        let result = svc
            .run_bulk_action(&BulkAction::Enable, &ids(&["M1", "M2", "M3"]))
            .await
            .unwrap();

        assert_eq!(result.succeeded, ids(&["M1", "M3"]));
        assert_eq!(result.failed_ids(), ids(&["M2"]));
    }

    #[tokio::test]
    async fn unknown_ports_come_back_as_failures() {
        let (_, svc) = service(MockGatewayClient::with_ports(&["M1"]));
        let result = svc.delete(&ids(&["M1", "M9"])).await.unwrap();
        assert_eq!(result.succeeded, ids(&["M1"]));
        assert_eq!(result.failed_ids(), ids(&["M9"]));
    }

    #[tokio::test]
    async fn idempotent_actions_retry_transient_errors() {
        let mock = MockGatewayClient::with_ports(&["M1"]).fail_next_calls(
            1,
            GatewayError::DeviceBusy {
                gateway: "mock".into(),
                port_id: None,
            },
        );
        let (mock, svc) = service(mock);

        let result = svc.set_enabled(&ids(&["M1"]), false).await.unwrap();
        assert!(result.is_complete_success());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn reboot_is_not_retried() {
        let mock = MockGatewayClient::with_ports(&["M1"]).fail_next_calls(
            1,
            GatewayError::Network {
                gateway: "mock".into(),
                detail: "reset".into(),
            },
        );
        let (mock, svc) = service(mock);

        let result = svc.reboot(&ids(&["M1"])).await;
        assert!(matches!(
            result,
            Err(CoreError::Gateway(GatewayError::Network { .. }))
        ));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_gateway_times_out() {
        let (_, svc) = service(MockGatewayClient::with_ports(&["M1"]).hang());
        let result = svc.reboot(&ids(&["M1"])).await;
        assert!(matches!(result, Err(CoreError::Timeout { .. })));
    }

    #[tokio::test]
    async fn apply_policy_requires_name() {
        let (_, svc) = service(MockGatewayClient::with_ports(&["M1"]));
        let result = svc.apply_policy(&ids(&["M1"]), "  ").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }
}
