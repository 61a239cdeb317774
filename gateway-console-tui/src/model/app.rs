//! 应用主状态

use gateway_console_core::types::CommandKind;

use super::state::{CommandState, ImeiState, MaintenanceState, ModalState, PortsState, SimState};
use super::{FocusPanel, Page, SidebarState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏状态
    pub sidebar: SidebarState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 网关名称（标题栏）
    pub gateway_name: String,

    // === 各页面状态 ===
    /// 端口列表（网关状态、仪表盘共用）
    pub ports: PortsState,
    /// SIM 卡余额
    pub sim: SimState,
    /// IMEI 管理
    pub imei: ImeiState,
    /// USSD 指令
    pub ussd: CommandState,
    /// AT 指令
    pub at: CommandState,
    /// 系统维护
    pub maintenance: MaintenanceState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置（切换语言 / 主题后保存）
    pub config: AppConfig,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig, gateway_name: impl Into<String>) -> Self {
        let sidebar = SidebarState::new();
        let current_page = Page::from_path(sidebar.current_path()).unwrap_or_default();
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            sidebar,
            current_page,
            status_message: None,
            gateway_name: gateway_name.into(),
            ports: PortsState::new(),
            sim: SimState::new(),
            imei: ImeiState::new(),
            ussd: CommandState::new(CommandKind::Ussd),
            at: CommandState::new(CommandKind::At),
            maintenance: MaintenanceState::new(),
            modal: ModalState::new(),
            config,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn commands(&self, kind: CommandKind) -> &CommandState {
        match kind {
            CommandKind::Ussd => &self.ussd,
            CommandKind::At => &self.at,
        }
    }

    pub fn commands_mut(&mut self, kind: CommandKind) -> &mut CommandState {
        match kind {
            CommandKind::Ussd => &mut self.ussd,
            CommandKind::At => &mut self.at,
        }
    }

    /// 端口列表更新后同步各页面的终端行
    pub fn sync_terminals(&mut self) {
        let terminals = self.ports.terminals();
        self.sim.set_terminals(terminals.clone());
        self.ussd.set_terminals(terminals.clone());
        self.at.set_terminals(terminals);
    }
}
