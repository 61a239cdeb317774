//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有对网关的调用。
//! 通过 gateway-console-core 的服务访问设备，设备本身由 `SimulatedGateway` 模拟。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;           // 核心服务入口
//!         mod config_service;         // 配置服务（TOML 文件）
//!         mod simulated_gateway;      // 模拟网关（GatewayControlClient 实现）
//!         mod task;                   // 后台任务与执行器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     持有 ServiceContext（网关客户端 + 调用策略），按需创建：
//!         - ports()           端口列表与批量操作
//!         - commands()        AT / USSD 指令
//!         - sim()             SIM 卡余额
//!         - imei()            IMEI 查看与改写
//!         - maintenance()     固件 / 授权 / 备份上传
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、模拟网关（SimulatedGateway）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     真实设备协议确定之前的占位实现：
//!         - 固定种子生成端口、SIM 卡、IMEI
//!         - 每次调用固定延迟加随机抖动
//!         - 配置中的 failing_ports 总是失败，用于演示部分失败
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     用户在操作栏上按下 Alt+b（重启）并确认
//!         ↓
//!     Update 层调用 ActionBar::begin，返回 Task::RunBulkAction
//!         ↓
//!     主循环调用 TaskRunner::spawn，任务在 tokio 运行时上执行
//!         ↓
//!     PortService::run_bulk_action → SimulatedGateway::reboot_ports
//!         ↓
//!     BackendMessage::BulkActionFinished 经通道返回主循环
//!         ↓
//!     Update 层调用 ActionBar::finish，清空或保留失败项
//!         ↓
//!     View 层重新渲染
//! ```

mod config_service;
mod core_service;
mod simulated_gateway;
mod task;

pub use config_service::{
    AppConfig, ConfigError, ConfigService, GatewaySettings, LogSettings, SimulatorSettings,
    TomlConfigService,
};
pub use core_service::CoreService;
pub use simulated_gateway::SimulatedGateway;
pub use task::{execute, Task, TaskRunner};
