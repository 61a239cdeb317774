//! IMEI 管理服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{require_selection, ServiceContext};
use crate::types::{BatchOperationResult, ImeiRecord, ImeiTemplate};

/// IMEI 管理服务
pub struct ImeiService {
    ctx: Arc<ServiceContext>,
}

impl ImeiService {
    /// 创建 IMEI 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取全部终端的 IMEI
    pub async fn list_imei(&self) -> CoreResult<Vec<ImeiRecord>> {
        self.ctx
            .call("list_imei", true, || self.ctx.client.list_imei())
            .await
    }

    /// 按模板改写所选终端的 IMEI
    ///
    /// 模板先在本地解析校验，非法模板不会下发到设备。
    /// 改写后模块需要重启才会生效，因此不重试。
    pub async fn update_imei(
        &self,
        terminals: &[String],
        template: &str,
    ) -> CoreResult<BatchOperationResult> {
        require_selection(terminals)?;
        let template = ImeiTemplate::parse(template)?;
        log::info!(
            "[{}] Rewriting IMEI of {} terminal(s) with template {template}",
            self.ctx.gateway_name(),
            terminals.len()
        );

        let result = self
            .ctx
            .call("update_imei", false, || {
                self.ctx.client.update_imei(terminals, &template)
            })
            .await?;
        Ok(result.reconcile(terminals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{create_test_context, ids, MockGatewayClient};
    use crate::utils::imei::is_valid_imei;

    #[tokio::test]
    async fn rewritten_imei_is_luhn_valid_and_matches_template() {
        let (mock, ctx) = create_test_context(MockGatewayClient::with_ports(&["M1", "M2"]));
        let svc = ImeiService::new(ctx);

        let result = svc
            .update_imei(&ids(&["M2"]), "35693803xxxxxx")
            .await
            .unwrap();
        assert!(result.is_complete_success());

        let records = svc.list_imei().await.unwrap();
        let m2 = records.iter().find(|r| r.terminal == "M2").unwrap();
        assert!(m2.is_modified());
        assert!(m2.current.starts_with("35693803"));
        assert!(is_valid_imei(&m2.current));

        let m1 = records.iter().find(|r| r.terminal == "M1").unwrap();
        assert!(!m1.is_modified());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn invalid_template_is_rejected_locally() {
        let (mock, ctx) = create_test_context(MockGatewayClient::with_ports(&["M1"]));
        let svc = ImeiService::new(ctx);

        let result = svc.update_imei(&ids(&["M1"]), "3569xx").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn rejected_terminals_are_reported() {
        let (_, ctx) =
            create_test_context(MockGatewayClient::with_ports(&["M1", "M2"]).fail_port("M1"));
        let svc = ImeiService::new(ctx);

        let result = svc
            .update_imei(&ids(&["M1", "M2"]), "86xxxxxxxxxxxx")
            .await
            .unwrap();
        assert_eq!(result.failed_ids(), ids(&["M1"]));
        assert_eq!(result.succeeded, ids(&["M2"]));
    }
}
