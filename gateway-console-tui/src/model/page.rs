//! 页面定义

use gateway_console_core::types::{CommandKind, UploadKind};

use crate::i18n::t;

/// 内容面板显示的页面（每个菜单路由对应一个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    PortList,
    SimCards,
    GatewayStatus,
    Imei,
    Ussd,
    AtCommand,
    Firmware,
    Backup,
    License,
}

impl Page {
    /// 全部页面（菜单顺序）
    pub const ALL: [Page; 10] = [
        Page::Dashboard,
        Page::PortList,
        Page::SimCards,
        Page::GatewayStatus,
        Page::Imei,
        Page::Ussd,
        Page::AtCommand,
        Page::Firmware,
        Page::Backup,
        Page::License,
    ];

    /// 路由路径
    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::PortList => "/ports/list",
            Page::SimCards => "/ports/sim",
            Page::GatewayStatus => "/gateway/status",
            Page::Imei => "/gateway/imei",
            Page::Ussd => "/tools/ussd",
            Page::AtCommand => "/tools/at",
            Page::Firmware => "/system/firmware",
            Page::Backup => "/system/backup",
            Page::License => "/system/license",
        }
    }

    /// 按路由路径查找页面
    pub fn from_path(path: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// 页面标题
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Dashboard => texts.nav.dashboard,
            Page::PortList => texts.nav.port_list,
            Page::SimCards => texts.nav.sim_cards,
            Page::GatewayStatus => texts.nav.gateway_status,
            Page::Imei => texts.nav.imei,
            Page::Ussd => texts.nav.ussd,
            Page::AtCommand => texts.nav.at_command,
            Page::Firmware => texts.nav.firmware,
            Page::Backup => texts.nav.backup,
            Page::License => texts.nav.license,
        }
    }

    /// 指令页面对应的指令类型
    pub fn command_kind(self) -> Option<CommandKind> {
        match self {
            Page::Ussd => Some(CommandKind::Ussd),
            Page::AtCommand => Some(CommandKind::At),
            _ => None,
        }
    }

    /// 维护页面对应的上传类型
    pub fn upload_kind(self) -> Option<UploadKind> {
        match self {
            Page::Firmware => Some(UploadKind::Firmware),
            Page::Backup => Some(UploadKind::Backup),
            Page::License => Some(UploadKind::License),
            _ => None,
        }
    }
}
