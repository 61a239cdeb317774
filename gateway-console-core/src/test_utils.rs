//! 测试辅助模块
//!
//! 提供 mock 网关客户端和便捷的测试工厂方法。

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, Mutex, RwLock};

use crate::error::{GatewayError, GatewayResult};
use crate::services::{CommandPolicy, ServiceContext};
use crate::traits::GatewayControlClient;
use crate::types::{
    BalanceQuery, BatchFailure, BatchOperationResult, ImeiRecord, ImeiTemplate, Port, PortStatus,
    SimBalance, TerminalResponse, UploadKind, UploadProgress,
};

const MOCK_NAME: &str = "mock";

// ===== MockGatewayClient =====

pub struct MockGatewayClient {
    ports: RwLock<Vec<Port>>,
    imei: RwLock<Vec<ImeiRecord>>,
    /// 这些端口在批量操作中逐项失败，指令不返回响应
    failing_ports: HashSet<String>,
    /// 前 N 次调用整体失败
    queued_errors: Mutex<VecDeque<GatewayError>>,
    /// 所有调用永不返回（测试超时路径）
    hang: bool,
    calls: AtomicUsize,
}

impl MockGatewayClient {
    pub fn with_ports(ids: &[&str]) -> Self {
        let ports = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Port {
                id: (*id).to_string(),
                name: format!("Port {id}"),
                terminal: format!("{id}T1"),
                model: "EC20".to_string(),
                imei: format!("86{i:013}"),
                status: PortStatus::Online,
            })
            .collect::<Vec<_>>();
        let imei = ports
            .iter()
            .map(|p| ImeiRecord {
                terminal: p.id.clone(),
                original: p.imei.clone(),
                current: p.imei.clone(),
            })
            .collect();

        Self {
            ports: RwLock::new(ports),
            imei: RwLock::new(imei),
            failing_ports: HashSet::new(),
            queued_errors: Mutex::new(VecDeque::new()),
            hang: false,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn fail_port(mut self, id: &str) -> Self {
        self.failing_ports.insert(id.to_string());
        self
    }

    #[must_use]
    pub fn fail_next_calls(mut self, count: usize, err: GatewayError) -> Self {
        {
            let queue = self.queued_errors.get_mut();
            for _ in 0..count {
                queue.push_back(err.clone());
            }
        }
        self
    }

    #[must_use]
    pub fn hang(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn port_status(&self, id: &str) -> Option<PortStatus> {
        self.ports
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.status)
    }

    /// 每次调用的公共入口：计数、挂起、出队预设错误
    async fn enter(&self) -> GatewayResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        match self.queued_errors.lock().await.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn apply_each<F>(&self, ids: &[String], mut apply: F) -> BatchOperationResult
    where
        F: FnMut(&mut Vec<Port>, &str) -> bool,
    {
        let mut ports = self.ports.write().await;
        let mut result = BatchOperationResult::default();
        for id in ids {
            if self.failing_ports.contains(id) {
                result.failures.push(BatchFailure {
                    id: id.clone(),
                    reason: "port busy".to_string(),
                });
            } else if apply(&mut *ports, id) {
                result.succeeded.push(id.clone());
            } else {
                result.failures.push(BatchFailure {
                    id: id.clone(),
                    reason: "port not found".to_string(),
                });
            }
        }
        result
    }

    async fn respond(&self, terminals: &[String], content: &str) -> Vec<TerminalResponse> {
        let ports = self.ports.read().await;
        terminals
            .iter()
            .filter(|t| !self.failing_ports.contains(*t))
            .filter(|t| ports.iter().any(|p| &p.id == *t))
            .map(|t| TerminalResponse::success(t.clone(), content))
            .collect()
    }
}

fn set_status(ports: &mut [Port], id: &str, status: PortStatus) -> bool {
    match ports.iter_mut().find(|p| p.id == id) {
        Some(port) => {
            port.status = status;
            true
        }
        None => false,
    }
}

#[async_trait]
impl GatewayControlClient for MockGatewayClient {
    fn name(&self) -> &str {
        MOCK_NAME
    }

    async fn list_ports(&self) -> GatewayResult<Vec<Port>> {
        self.enter().await?;
        Ok(self.ports.read().await.clone())
    }

    async fn set_port_enabled(
        &self,
        ids: &[String],
        enabled: bool,
    ) -> GatewayResult<BatchOperationResult> {
        self.enter().await?;
        let status = if enabled {
            PortStatus::Online
        } else {
            PortStatus::Disabled
        };
        Ok(self
            .apply_each(ids, |ports, id| set_status(ports, id, status))
            .await)
    }

    async fn reboot_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult> {
        self.enter().await?;
        Ok(self
            .apply_each(ids, |ports, id| set_status(ports, id, PortStatus::Rebooting))
            .await)
    }

    async fn delete_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult> {
        self.enter().await?;
        Ok(self
            .apply_each(ids, |ports, id| {
                let before = ports.len();
                ports.retain(|p| p.id != id);
                ports.len() < before
            })
            .await)
    }

    async fn apply_policy(
        &self,
        ids: &[String],
        _policy: &str,
    ) -> GatewayResult<BatchOperationResult> {
        self.enter().await?;
        Ok(self
            .apply_each(ids, |ports, id| ports.iter().any(|p| p.id == id))
            .await)
    }

    async fn send_at_command(
        &self,
        terminals: &[String],
        _command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>> {
        self.enter().await?;
        Ok(self.respond(terminals, "OK").await)
    }

    async fn send_ussd(
        &self,
        terminals: &[String],
        _command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>> {
        self.enter().await?;
        Ok(self.respond(terminals, "Balance: 12.50").await)
    }

    async fn query_balance(&self, query: &BalanceQuery) -> GatewayResult<Vec<SimBalance>> {
        self.enter().await?;
        let ports = self.ports.read().await;
        let selected: Vec<&Port> = match query {
            BalanceQuery::Terminals(ids) => ports.iter().filter(|p| ids.contains(&p.id)).collect(),
            BalanceQuery::Operator(_) => ports.iter().collect(),
        };
        Ok(selected
            .into_iter()
            .map(|p| SimBalance {
                terminal: p.id.clone(),
                operator: "China Mobile".to_string(),
                phone_number: None,
                balance: 12.5,
                currency: "CNY".to_string(),
                queried_at: chrono::Utc::now(),
            })
            .collect())
    }

    async fn list_imei(&self) -> GatewayResult<Vec<ImeiRecord>> {
        self.enter().await?;
        Ok(self.imei.read().await.clone())
    }

    async fn update_imei(
        &self,
        terminals: &[String],
        template: &ImeiTemplate,
    ) -> GatewayResult<BatchOperationResult> {
        self.enter().await?;
        let mut rng = StdRng::seed_from_u64(7);
        let mut records = self.imei.write().await;
        let mut result = BatchOperationResult::default();
        for terminal in terminals {
            match records.iter_mut().find(|r| &r.terminal == terminal) {
                Some(record) if !self.failing_ports.contains(terminal) => {
                    record.current = template.generate(&mut rng);
                    result.succeeded.push(terminal.clone());
                }
                _ => result.failures.push(BatchFailure {
                    id: terminal.clone(),
                    reason: "write rejected".to_string(),
                }),
            }
        }
        Ok(result)
    }

    async fn upload(
        &self,
        _kind: UploadKind,
        data: Vec<u8>,
        progress: mpsc::Sender<UploadProgress>,
    ) -> GatewayResult<()> {
        self.enter().await?;
        let total = data.len();
        let _ = progress.send(UploadProgress::Started { total }).await;
        let _ = progress
            .send(UploadProgress::Transferred { sent: total, total })
            .await;
        let _ = progress.send(UploadProgress::Verifying).await;
        let _ = progress.send(UploadProgress::Completed).await;
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 测试用策略：短超时、极短退避
pub fn test_policy() -> CommandPolicy {
    CommandPolicy {
        timeout: Duration::from_secs(2),
        max_retries: 2,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

/// 创建持有 mock 客户端的服务上下文
pub fn create_test_context(
    mock: MockGatewayClient,
) -> (Arc<MockGatewayClient>, Arc<ServiceContext>) {
    let mock = Arc::new(mock);
    let ctx = Arc::new(ServiceContext::new(mock.clone(), test_policy()));
    (mock, ctx)
}

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
