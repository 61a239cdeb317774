//! 网关控制客户端抽象 Trait

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::GatewayResult;
use crate::types::{
    BalanceQuery, BatchOperationResult, ImeiRecord, ImeiTemplate, Port, SimBalance,
    TerminalResponse, UploadKind, UploadProgress,
};

/// 网关控制客户端 Trait
///
/// 控制台所有对设备的调用都经过此 trait。真实设备协议确定之前，
/// 此接口是占位契约；平台实现：
/// - TUI: `SimulatedGateway`（内存模拟，固定延迟）
/// - 测试: `MockGatewayClient`
///
/// 批量操作按 ID 返回结果：整个调用失败时返回 `Err`，
/// 部分失败时返回 `Ok`，失败的 ID 记录在 [`BatchOperationResult::failures`] 中。
#[async_trait]
pub trait GatewayControlClient: Send + Sync {
    /// 网关标识（用于日志与错误）
    fn name(&self) -> &str;

    /// 获取全部端口
    async fn list_ports(&self) -> GatewayResult<Vec<Port>>;

    /// 启用或禁用端口
    ///
    /// # Arguments
    /// * `ids` - 端口 ID 列表
    /// * `enabled` - `true` 启用，`false` 禁用
    async fn set_port_enabled(
        &self,
        ids: &[String],
        enabled: bool,
    ) -> GatewayResult<BatchOperationResult>;

    /// 重启端口模块
    async fn reboot_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult>;

    /// 删除端口配置
    async fn delete_ports(&self, ids: &[String]) -> GatewayResult<BatchOperationResult>;

    /// 为端口应用策略
    ///
    /// # Arguments
    /// * `ids` - 端口 ID 列表
    /// * `policy` - 策略名称
    async fn apply_policy(
        &self,
        ids: &[String],
        policy: &str,
    ) -> GatewayResult<BatchOperationResult>;

    /// 向终端下发 AT 指令，每个终端返回一条响应
    async fn send_at_command(
        &self,
        terminals: &[String],
        command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>>;

    /// 向终端发起 USSD 会话，每个终端返回一条响应
    async fn send_ussd(
        &self,
        terminals: &[String],
        command: &str,
    ) -> GatewayResult<Vec<TerminalResponse>>;

    /// 查询 SIM 卡余额
    async fn query_balance(&self, query: &BalanceQuery) -> GatewayResult<Vec<SimBalance>>;

    /// 获取全部终端的 IMEI
    async fn list_imei(&self) -> GatewayResult<Vec<ImeiRecord>>;

    /// 按模板改写终端 IMEI
    async fn update_imei(
        &self,
        terminals: &[String],
        template: &ImeiTemplate,
    ) -> GatewayResult<BatchOperationResult>;

    /// 上传固件 / 授权 / 备份文件
    ///
    /// 传输过程中通过 `progress` 发送进度事件；接收端被丢弃时进度静默丢失，上传继续。
    async fn upload(
        &self,
        kind: UploadKind,
        data: Vec<u8>,
        progress: mpsc::Sender<UploadProgress>,
    ) -> GatewayResult<()>;
}
