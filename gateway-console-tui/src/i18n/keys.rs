//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `ports.*`, `commands.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**，**状态栏消息归 `status.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 侧边栏菜单文本
    pub nav: NavTexts,
    /// 仪表盘文本
    pub dashboard: DashboardTexts,
    /// 端口列表 / 网关状态文本
    pub ports: PortsTexts,
    /// SIM 卡页面文本
    pub sim: SimTexts,
    /// IMEI 页面文本
    pub imei: ImeiTexts,
    /// USSD / AT 指令页面文本
    pub commands: CommandsTexts,
    /// 系统维护页面文本
    pub maintenance: MaintenanceTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub selected: &'static str,
    pub busy: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示动作词
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub toggle_row: &'static str,
    pub select_all: &'static str,
    pub clear: &'static str,
    pub edit: &'static str,
    pub enable: &'static str,
    pub disable: &'static str,
    pub reboot: &'static str,
    pub delete: &'static str,
    pub policy: &'static str,
    pub refresh: &'static str,
    pub send: &'static str,
    pub query: &'static str,
    pub rewrite: &'static str,
    pub upload: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 侧边栏
// ============================================================================

/// 侧边栏菜单显示名（按路由）
pub struct NavTexts {
    pub title: &'static str,
    pub dashboard: &'static str,
    pub ports: &'static str,
    pub port_list: &'static str,
    pub sim_cards: &'static str,
    pub gateway: &'static str,
    pub gateway_status: &'static str,
    pub imei: &'static str,
    pub tools: &'static str,
    pub ussd: &'static str,
    pub at_command: &'static str,
    pub system: &'static str,
    pub firmware: &'static str,
    pub backup: &'static str,
    pub license: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct DashboardTexts {
    pub gateway: &'static str,
    pub total_ports: &'static str,
    pub port_summary: &'static str,
    pub last_refresh: &'static str,
    pub never: &'static str,
}

/// 端口文本（端口列表、网关状态共用）
pub struct PortsTexts {
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_terminal: &'static str,
    pub col_model: &'static str,
    pub col_imei: &'static str,
    pub col_status: &'static str,
    pub no_ports: &'static str,
    pub status_online: &'static str,
    pub status_offline: &'static str,
    pub status_disabled: &'static str,
    pub status_rebooting: &'static str,
    pub status_error: &'static str,
}

pub struct SimTexts {
    pub col_operator: &'static str,
    pub col_phone: &'static str,
    pub col_balance: &'static str,
    pub col_queried_at: &'static str,
    pub not_queried: &'static str,
}

pub struct ImeiTexts {
    pub col_original: &'static str,
    pub col_current: &'static str,
    pub col_modified: &'static str,
    pub no_records: &'static str,
}

pub struct CommandsTexts {
    pub terminals: &'static str,
    pub responses: &'static str,
    pub last_command: &'static str,
    pub col_status: &'static str,
    pub pending: &'static str,
    pub success: &'static str,
    pub failed: &'static str,
    pub no_responses: &'static str,
}

pub struct MaintenanceTexts {
    pub firmware: &'static str,
    pub backup: &'static str,
    pub license: &'static str,
    pub size_limit: &'static str,
    pub last_file: &'static str,
    pub idle: &'static str,
    pub transferring: &'static str,
    pub verifying: &'static str,
    pub completed: &'static str,
    pub failed: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub error_title: &'static str,
    pub confirm_title: &'static str,
    pub confirm_bulk: &'static str,
    pub edit_port_title: &'static str,
    pub port_name: &'static str,
    pub policy_title: &'static str,
    pub policy_name: &'static str,
    pub imei_title: &'static str,
    pub imei_template: &'static str,
    pub imei_hint: &'static str,
    pub command_title: &'static str,
    pub command_input: &'static str,
    pub ussd_hint: &'static str,
    pub at_hint: &'static str,
    pub upload_title: &'static str,
    pub upload_path: &'static str,
    pub input_required: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusTexts {
    pub loading_ports: &'static str,
    pub ports_loaded: &'static str,
    pub nothing_selected: &'static str,
    pub action_busy: &'static str,
    pub action_running: &'static str,
    pub action_done: &'static str,
    pub action_partial: &'static str,
    pub action_failed: &'static str,
    pub command_sending: &'static str,
    pub command_done: &'static str,
    pub balance_loaded: &'static str,
    pub imei_updated: &'static str,
    pub upload_started: &'static str,
    pub upload_done: &'static str,
    pub port_renamed: &'static str,
    pub config_save_failed: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub lists: &'static str,
    pub ports: &'static str,
    pub lines_global: &'static [(&'static str, &'static str)],
    pub lines_lists: &'static [(&'static str, &'static str)],
    pub lines_ports: &'static [(&'static str, &'static str)],
}
