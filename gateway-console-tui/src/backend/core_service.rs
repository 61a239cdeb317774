//! 核心服务
//!
//! 封装 gateway-console-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use gateway_console_core::services::{
    CommandService, ImeiService, MaintenanceService, PortService, SimService,
};
use gateway_console_core::{CommandPolicy, GatewayControlClient, ServiceContext};

/// TUI 核心服务
///
/// 持有服务上下文，按需创建各业务服务
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(client: Arc<dyn GatewayControlClient>, policy: CommandPolicy) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(client, policy)),
        }
    }

    /// 网关名称（标题栏显示）
    pub fn gateway_name(&self) -> &str {
        self.ctx.gateway_name()
    }

    // ========== 端口 ==========

    /// 获取端口服务
    pub fn ports(&self) -> PortService {
        PortService::new(self.ctx.clone())
    }

    // ========== 指令 / SIM ==========

    /// 获取指令服务
    pub fn commands(&self) -> CommandService {
        CommandService::new(self.ctx.clone())
    }

    /// 获取 SIM 卡服务
    pub fn sim(&self) -> SimService {
        SimService::new(self.ctx.clone())
    }

    // ========== 网关设置 / 系统维护 ==========

    /// 获取 IMEI 服务
    pub fn imei(&self) -> ImeiService {
        ImeiService::new(self.ctx.clone())
    }

    /// 获取维护服务
    pub fn maintenance(&self) -> MaintenanceService {
        MaintenanceService::new(self.ctx.clone())
    }
}
