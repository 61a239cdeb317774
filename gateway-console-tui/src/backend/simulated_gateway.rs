//! 模拟网关
//!
//! 真实设备协议确定之前使用的内存网关：固定种子的模拟数据加上每次调用的延迟。
//! 配置中 `failing_ports` 列出的端口（及其终端）在批量操作中逐项失败、指令不返回响应，
//! 用于演示部分失败。

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::future::join_all;
use gateway_console_core::types::{
    BalanceQuery, BatchFailure, BatchOperationResult, ImeiRecord, ImeiTemplate, Port, PortStatus,
    SimBalance, TerminalResponse, UploadKind, UploadProgress,
};
use gateway_console_core::{GatewayControlClient, GatewayError, GatewayResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, RwLock};

use super::config_service::SimulatorSettings;

/// 模拟数据的随机种子（每次启动数据一致）
const SEED: u64 = 0x5EED_6A7E;
/// 出厂 IMEI 模板
const FACTORY_IMEI_TEMPLATE: &str = "86xxxxxxxxxxxx";
/// 重启持续时间
const REBOOT_DURATION: Duration = Duration::from_secs(5);
/// 上传分块数
const UPLOAD_CHUNKS: usize = 10;

const MODELS: [&str; 3] = ["EC20", "EC25", "SIM7600"];
const OPERATORS: [&str; 3] = ["China Mobile", "China Unicom", "China Telecom"];

/// 单张 SIM 卡的静态信息
#[derive(Debug, Clone)]
struct SimCard {
    terminal: String,
    operator: String,
    phone_number: Option<String>,
    balance: f64,
}

#[derive(Debug, Default)]
struct DeviceState {
    ports: Vec<Port>,
    imei: Vec<ImeiRecord>,
    /// 端口 ID -> 重启完成时间
    reboot_deadlines: HashMap<String, Instant>,
}

impl DeviceState {
    /// 重启时间已到的端口恢复在线
    fn settle_reboots(&mut self) {
        let now = Instant::now();
        let finished: Vec<String> = self
            .reboot_deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in finished {
            self.reboot_deadlines.remove(&id);
            if let Some(port) = self.ports.iter_mut().find(|p| p.id == id) {
                port.status = PortStatus::Online;
            }
        }
    }

    fn port_by_terminal(&self, terminal: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.terminal == terminal)
    }
}

/// 内存模拟网关
pub struct SimulatedGateway {
    name: String,
    latency: Duration,
    state: RwLock<DeviceState>,
    sims: Vec<SimCard>,
    /// 失败的端口 ID 与终端地址
    failing: HashSet<String>,
}

impl SimulatedGateway {
    pub fn new(settings: &SimulatorSettings) -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let template = ImeiTemplate::parse(FACTORY_IMEI_TEMPLATE).ok();

        let mut ports = Vec::with_capacity(settings.port_count);
        let mut imei = Vec::with_capacity(settings.port_count);
        let mut sims = Vec::with_capacity(settings.port_count);
        for i in 1..=settings.port_count {
            let id = format!("M{i}");
            let terminal = format!("{id}T1");
            let factory_imei = template
                .as_ref()
                .map(|t| t.generate(&mut rng))
                .unwrap_or_default();
            let status = if i % 8 == 0 {
                PortStatus::Offline
            } else {
                PortStatus::Online
            };

            ports.push(Port {
                id: id.clone(),
                name: format!("Port {i}"),
                terminal: terminal.clone(),
                model: MODELS[i % MODELS.len()].to_string(),
                imei: factory_imei.clone(),
                status,
            });
            imei.push(ImeiRecord {
                terminal: terminal.clone(),
                original: factory_imei.clone(),
                current: factory_imei,
            });
            let cents: u32 = rng.random_range(0..20_000);
            sims.push(SimCard {
                terminal,
                operator: OPERATORS[i % OPERATORS.len()].to_string(),
                phone_number: (i % 5 != 0).then(|| format!("1380013{i:04}")),
                balance: f64::from(cents) / 100.0,
            });
        }

        let failing = settings
            .failing_ports
            .iter()
            .flat_map(|id| [id.clone(), format!("{id}T1")])
            .collect();

        log::info!(
            "Simulated gateway '{}' ready with {} ports (latency {} ms)",
            settings.name,
            settings.port_count,
            settings.latency_ms
        );

        Self {
            name: settings.name.clone(),
            latency: Duration::from_millis(settings.latency_ms),
            state: RwLock::new(DeviceState {
                ports,
                imei,
                reboot_deadlines: HashMap::new(),
            }),
            sims,
            failing,
        }
    }

    /// 基础延迟加上至多一半的随机抖动
    async fn delay(&self) {
        let jitter_ms = {
            let max = u64::try_from(self.latency.as_millis() / 2).unwrap_or(0);
            if max == 0 {
                0
            } else {
                rand::rng().random_range(0..=max)
            }
        };
        tokio::time::sleep(self.latency + Duration::from_millis(jitter_ms)).await;
    }

    fn is_failing(&self, id: &str) -> bool {
        self.failing.contains(id)
    }

    fn failure(id: &str, reason: &str) -> BatchFailure {
        BatchFailure {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 对每个端口执行 `apply`，返回逐项结果
    async fn apply_each<F>(&self, ids: &[String], mut apply: F) -> BatchOperationResult
    where
        F: FnMut(&mut DeviceState, &str) -> Result<(), &'static str>,
    {
        self.delay().await;
        let mut state = self.state.write().await;
        state.settle_reboots();

        let mut result = BatchOperationResult::default();
        for id in ids {
            if self.is_failing(id) {
                result.failures.push(Self::failure(id, "module not responding"));
                continue;
            }
            if !state.ports.iter().any(|p| &p.id == id) {
                result.failures.push(Self::failure(id, "port not found"));
                continue;
            }
            match apply(&mut *state, id) {
                Ok(()) => result.succeeded.push(id.clone()),
                Err(reason) => result.failures.push(Self::failure(id, reason)),
            }
        }
        result
    }

    /// 并发模拟每个终端的响应；失败终端不返回任何响应
    async fn respond_each<F>(&self, terminals: &[String], answer: F) -> Vec<TerminalResponse>
    where
        F: Fn(&Port) -> TerminalResponse,
    {
        let snapshot: Vec<Option<Port>> = {
            let mut state = self.state.write().await;
            state.settle_reboots();
            terminals
                .iter()
                .map(|t| state.port_by_terminal(t).cloned())
                .collect()
        };

        let answers = terminals.iter().zip(snapshot).map(|(terminal, port)| {
            let answer = &answer;
            async move {
                self.delay().await;
                if self.is_failing(terminal) {
                    return None;
                }
                Some(match port {
                    None => TerminalResponse::failed(terminal.clone(), "terminal not found"),
                    Some(port) if port.status == PortStatus::Disabled => {
                        TerminalResponse::failed(terminal.clone(), "port disabled")
                    }
                    Some(port) if !port.status.is_usable() => {
                        TerminalResponse::failed(terminal.clone(), "no network registration")
                    }
                    Some(port) => answer(&port),
                })
            }
        });

        join_all(answers).await.into_iter().flatten().collect()
    }

    fn sim(&self, terminal: &str) -> Option<&SimCard> {
        self.sims.iter().find(|s| s.terminal == terminal)
    }

    fn at_reply(&self, port: &Port, command: &str) -> String {
        let upper = command.to_ascii_uppercase();
        match upper.as_str() {
            "AT" => "OK".to_string(),
            "ATI" => format!("Quectel\r\n{}\r\nOK", port.model),
            "AT+CSQ" => "+CSQ: 23,99\r\nOK".to_string(),
            "AT+CGSN" | "AT+GSN" => format!("{}\r\nOK", port.imei),
            "AT+COPS?" => {
                let operator = self
                    .sim(&port.terminal)
                    .map_or("", |s| s.operator.as_str());
                format!("+COPS: 0,0,\"{operator}\",7\r\nOK")
            }
            _ => "OK".to_string(),
        }
    }

    fn ussd_reply(&self, port: &Port, code: &str) -> TerminalResponse {
        match (code, self.sim(&port.terminal)) {
            ("*100#" | "*101#", Some(sim)) => TerminalResponse::success(
                port.terminal.clone(),
                format!("Balance: {:.2} CNY", sim.balance),
            ),
            ("*99#", Some(sim)) => TerminalResponse::success(
                port.terminal.clone(),
                format!(
                    "Your number is {}",
                    sim.phone_number.as_deref().unwrap_or("unknown")
                ),
            ),
            (_, Some(_)) => {
                TerminalResponse::failed(port.terminal.clone(), "USSD code not recognized")
            }
            (_, None) => TerminalResponse::failed(port.terminal.clone(), "no SIM card"),
        }
    }
}

fn set_status(state: &mut DeviceState, id: &str, status: PortStatus) {
    state.reboot_deadlines.remove(id);
    if let Some(port) = state.ports.iter_mut().find(|p| p.id == id) {
        port.status = status;
    }
}

#[async_trait]
impl GatewayControlClient for SimulatedGateway {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_ports(&self) -> GatewayResult<Vec<Port>> {
        self.delay().await;
        let mut state = self.state.write().await;
        state.settle_reboots();
        Ok(state.ports.clone())
    }

    async fn set_port_enabled(
        &self,
        ids: &[String],
        enabled: bool,
    ) -> GatewayResult<BatchOperationResult> {
        let status = if enabled {
            PortStatus::Online
        } else {
            PortStatus::Disabled
        };
        Ok(self
            .apply_each(ids, |state, id| {
                set_status(state, id, status);
                Ok(())
            })
            .await)
    }

    async fn reboot_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult> {
        let deadline = Instant::now() + REBOOT_DURATION;
        Ok(self
            .apply_each(ids, |state, id| {
                let disabled = state
                    .ports
                    .iter()
                    .any(|p| p.id == id && p.status == PortStatus::Disabled);
                if disabled {
                    return Err("port is disabled");
                }
                set_status(state, id, PortStatus::Rebooting);
                state.reboot_deadlines.insert(id.to_string(), deadline);
                Ok(())
            })
            .await)
    }

    async fn delete_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult> {
        Ok(self
            .apply_each(ids, |state, id| {
                let terminal = state
                    .ports
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.terminal.clone());
                state.ports.retain(|p| p.id != id);
                state.reboot_deadlines.remove(id);
                if let Some(terminal) = terminal {
                    state.imei.retain(|r| r.terminal != terminal);
                }
                Ok(())
            })
            .await)
    }

    async fn apply_policy(
        &self,
        ids: &[String],
        policy: &str,
    ) -> GatewayResult<BatchOperationResult> {
        log::debug!("[{}] Applying policy '{policy}' to {ids:?}", self.name);
        Ok(self.apply_each(ids, |_, _| Ok(())).await)
    }

    async fn send_at_command(
        &self,
        terminals: &[String],
        command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>> {
        Ok(self
            .respond_each(terminals, |port| {
                TerminalResponse::success(port.terminal.clone(), self.at_reply(port, command))
            })
            .await)
    }

    async fn send_ussd(
        &self,
        terminals: &[String],
        command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>> {
        Ok(self
            .respond_each(terminals, |port| self.ussd_reply(port, command))
            .await)
    }

    async fn query_balance(&self, query: &BalanceQuery) -> GatewayResult<Vec<SimBalance>> {
        self.delay().await;
        let now = chrono::Utc::now();
        let balances = self
            .sims
            .iter()
            .filter(|sim| !self.is_failing(&sim.terminal))
            .filter(|sim| match query {
                BalanceQuery::Terminals(ids) => ids.contains(&sim.terminal),
                BalanceQuery::Operator(name) => sim.operator.eq_ignore_ascii_case(name.trim()),
            })
            .map(|sim| SimBalance {
                terminal: sim.terminal.clone(),
                operator: sim.operator.clone(),
                phone_number: sim.phone_number.clone(),
                balance: sim.balance,
                currency: "CNY".to_string(),
                queried_at: now,
            })
            .collect();
        Ok(balances)
    }

    async fn list_imei(&self) -> GatewayResult<Vec<ImeiRecord>> {
        self.delay().await;
        Ok(self.state.read().await.imei.clone())
    }

    async fn update_imei(
        &self,
        terminals: &[String],
        template: &ImeiTemplate,
    ) -> GatewayResult<BatchOperationResult> {
        self.delay().await;
        let mut state = self.state.write().await;

        let mut result = BatchOperationResult::default();
        let mut rng = rand::rng();
        for terminal in terminals {
            if self.is_failing(terminal) {
                result
                    .failures
                    .push(Self::failure(terminal, "write rejected by module"));
                continue;
            }
            let generated = template.generate(&mut rng);
            let Some(record) = state.imei.iter_mut().find(|r| &r.terminal == terminal) else {
                result
                    .failures
                    .push(Self::failure(terminal, "terminal not found"));
                continue;
            };
            record.current.clone_from(&generated);
            if let Some(port) = state.ports.iter_mut().find(|p| &p.terminal == terminal) {
                port.imei = generated;
            }
            result.succeeded.push(terminal.clone());
        }
        Ok(result)
    }

    async fn upload(
        &self,
        kind: UploadKind,
        data: Vec<u8>,
        progress: mpsc::Sender<UploadProgress>,
    ) -> GatewayResult<()> {
        let total = data.len();
        let _ = progress.send(UploadProgress::Started { total }).await;

        let chunk = total.div_ceil(UPLOAD_CHUNKS).max(1);
        let step = self.latency / u32::try_from(UPLOAD_CHUNKS).unwrap_or(1);
        let mut sent = 0;
        while sent < total {
            tokio::time::sleep(step).await;
            sent = (sent + chunk).min(total);
            let _ = progress
                .send(UploadProgress::Transferred { sent, total })
                .await;
        }

        let _ = progress.send(UploadProgress::Verifying).await;
        self.delay().await;
        if kind == UploadKind::License && !data.starts_with(b"LIC") {
            return Err(GatewayError::Rejected {
                gateway: self.name.clone(),
                raw_message: Some("license signature invalid".to_string()),
            });
        }
        let _ = progress.send(UploadProgress::Completed).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_console_core::utils::imei::is_valid_imei;

    fn gateway(failing: &[&str]) -> SimulatedGateway {
        SimulatedGateway::new(&SimulatorSettings {
            name: "test".to_string(),
            latency_ms: 0,
            port_count: 4,
            failing_ports: failing.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn seeded_imeis_are_valid_and_stable() {
        let a = tokio_test::block_on(gateway(&[]).list_imei()).unwrap();
        let b = tokio_test::block_on(gateway(&[]).list_imei()).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|r| is_valid_imei(&r.current) && !r.is_modified()));
    }

    #[test]
    fn failing_port_fails_each_batch_item() {
        let gw = gateway(&["M2"]);
        let result =
            tokio_test::block_on(gw.reboot_ports(&ids(&["M1", "M2", "M9"]))).unwrap();
        assert_eq!(result.succeeded, ids(&["M1"]));
        assert_eq!(result.failed_ids(), ids(&["M2", "M9"]));

        let ports = tokio_test::block_on(gw.list_ports()).unwrap();
        assert_eq!(ports[0].status, PortStatus::Rebooting);
    }

    #[test]
    fn failing_terminal_gives_no_response() {
        let gw = gateway(&["M2"]);
        let responses =
            tokio_test::block_on(gw.send_at_command(&ids(&["M1T1", "M2T1"]), "AT+CSQ")).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].terminal, "M1T1");
        assert!(responses[0].content.starts_with("+CSQ"));
    }

    #[test]
    fn disabled_port_cannot_reboot() {
        let gw = gateway(&[]);
        tokio_test::block_on(gw.set_port_enabled(&ids(&["M3"]), false)).unwrap();
        let result = tokio_test::block_on(gw.reboot_ports(&ids(&["M3"]))).unwrap();
        assert_eq!(result.failures[0].reason, "port is disabled");
    }

    #[test]
    fn license_upload_checks_signature() {
        let gw = gateway(&[]);
        let (tx, _rx) = mpsc::channel(32);
        let err = tokio_test::block_on(gw.upload(UploadKind::License, b"garbage".to_vec(), tx))
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { .. }));
    }
}
