//! 系统维护服务（固件升级、授权导入、配置备份恢复）

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{UploadKind, UploadProgress};

/// 系统维护服务
pub struct MaintenanceService {
    ctx: Arc<ServiceContext>,
}

impl MaintenanceService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 上传文件到网关
    ///
    /// 超过类型上限或为空的文件在本地拒绝。进度事件转发到 `progress`，
    /// 接收端关闭不影响上传本身。
    pub async fn upload(
        &self,
        kind: UploadKind,
        data: Vec<u8>,
        progress: mpsc::Sender<UploadProgress>,
    ) -> CoreResult<()> {
        let size = data.len();
        if size == 0 {
            return Err(CoreError::ValidationError(format!(
                "{} file is empty",
                kind.name()
            )));
        }
        let limit = kind.max_size();
        if size > limit {
            return Err(CoreError::UploadTooLarge { size, limit });
        }

        log::info!(
            "[{}] Uploading {} ({size} bytes)",
            self.ctx.gateway_name(),
            kind.name()
        );
        self.ctx
            .call("upload", false, || {
                self.ctx.client.upload(kind, data.clone(), progress.clone())
            })
            .await?;
        log::info!("[{}] {} upload completed", self.ctx.gateway_name(), kind.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, MockGatewayClient};

    fn service() -> MaintenanceService {
        let (_, ctx) = create_test_context(MockGatewayClient::with_ports(&["M1"]));
        MaintenanceService::new(ctx)
    }

    #[tokio::test]
    async fn upload_forwards_progress_events() {
        let svc = service();
        let (tx, mut rx) = mpsc::channel(8);

        svc.upload(UploadKind::Backup, vec![0u8; 1024], tx)
            .await
            .unwrap();

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        assert_eq!(events.first(), Some(&UploadProgress::Started { total: 1024 }));
        assert_eq!(events.last(), Some(&UploadProgress::Completed));
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let svc = service();
        let (tx, _rx) = mpsc::channel(1);
        let limit = UploadKind::License.max_size();

        let result = svc
            .upload(UploadKind::License, vec![0u8; limit + 1], tx)
            .await;
        assert!(matches!(result, Err(CoreError::UploadTooLarge { .. })));
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let svc = service();
        let (tx, _rx) = mpsc::channel(1);
        let result = svc.upload(UploadKind::Firmware, Vec::new(), tx).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }
}
