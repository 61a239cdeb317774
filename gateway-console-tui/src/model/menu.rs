//! 侧边栏菜单树
//!
//! 菜单名称即分组标识（展开集合按名称记录），显示文本按路由翻译。

use gateway_console_core::state::{MenuItem, SubMenuItem};

use super::Page;
use crate::i18n::t;

/// 控制台菜单
pub fn console_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("仪表盘", Page::Dashboard.path()),
        MenuItem::group(
            "端口管理",
            "/ports",
            vec![
                SubMenuItem::new("端口列表", Page::PortList.path()),
                SubMenuItem::new("SIM卡", Page::SimCards.path()),
            ],
        ),
        MenuItem::group(
            "网关设置",
            "/gateway",
            vec![
                SubMenuItem::new("网关状态", Page::GatewayStatus.path()),
                SubMenuItem::new("IMEI管理", Page::Imei.path()),
            ],
        ),
        MenuItem::group(
            "指令工具",
            "/tools",
            vec![
                SubMenuItem::new("USSD", Page::Ussd.path()),
                SubMenuItem::new("AT指令", Page::AtCommand.path()),
            ],
        ),
        MenuItem::group(
            "系统维护",
            "/system",
            vec![
                SubMenuItem::new("固件升级", Page::Firmware.path()),
                SubMenuItem::new("备份恢复", Page::Backup.path()),
                SubMenuItem::new("授权管理", Page::License.path()),
            ],
        ),
    ]
}

/// 菜单项的显示文本
pub fn menu_label(path: &str) -> Option<&'static str> {
    let nav = &t().nav;
    match path {
        "/ports" => Some(nav.ports),
        "/gateway" => Some(nav.gateway),
        "/tools" => Some(nav.tools),
        "/system" => Some(nav.system),
        _ => Page::from_path(path).map(Page::title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_console_core::state::resolve_active;

    #[test]
    fn every_leaf_route_has_a_page() {
        for item in console_menu() {
            if item.has_submenu() {
                assert!(item.submenu.iter().all(|s| Page::from_path(&s.path).is_some()));
            } else {
                assert!(Page::from_path(&item.path).is_some());
            }
            assert!(menu_label(&item.path).is_some());
        }
    }

    #[test]
    fn imei_route_activates_gateway_group() {
        let route = resolve_active(&console_menu(), "/gateway/imei");
        assert_eq!(route.active_top_id.as_deref(), Some("网关设置"));
        assert_eq!(route.implied_expand.as_deref(), Some("网关设置"));
    }
}
