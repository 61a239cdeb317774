//! 侧边栏导航状态
//!
//! 菜单树是静态的；`NavigationState` 只记录当前路径和展开的分组。
//! 导航到某个子菜单项时，所属分组会被自动展开（只增不减），
//! 只有用户显式 `toggle_group` 才会收起分组。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// 子菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMenuItem {
    pub name: String,
    pub path: String,
}

impl SubMenuItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// 顶级菜单项
///
/// 没有子菜单时直接导航；有子菜单时点击切换展开状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubMenuItem>,
}

impl MenuItem {
    /// 直接导航的菜单项
    pub fn link(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            submenu: Vec::new(),
        }
    }

    /// 带子菜单的分组
    pub fn group(
        name: impl Into<String>,
        path: impl Into<String>,
        submenu: Vec<SubMenuItem>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            submenu,
        }
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// 顶级项是否处于激活样式
    ///
    /// 无子菜单：路径完全相等；有子菜单：等于自身路径或任一子菜单路径。
    pub fn is_active(&self, path: &str) -> bool {
        self.path == path || self.submenu.iter().any(|sub| sub.path == path)
    }
}

/// 路由激活结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRoute {
    /// 激活的顶级项名称
    pub active_top_id: Option<String>,
    /// 激活的子菜单路径
    pub active_sub_path: Option<String>,
    /// 需要隐式展开的分组名称
    pub implied_expand: Option<String>,
}

impl ActiveRoute {
    /// 路径是否匹配到菜单树中的任何一项
    pub fn is_matched(&self) -> bool {
        self.active_top_id.is_some()
    }
}

/// 解析当前路径对应的激活项
///
/// 纯函数：只做精确匹配，不做前缀匹配；多个顶级项匹配时取菜单顺序中的第一个。
pub fn resolve_active(menu: &[MenuItem], path: &str) -> ActiveRoute {
    for item in menu {
        if let Some(sub) = item.submenu.iter().find(|sub| sub.path == path) {
            return ActiveRoute {
                active_top_id: Some(item.name.clone()),
                active_sub_path: Some(sub.path.clone()),
                implied_expand: Some(item.name.clone()),
            };
        }
        if item.path == path {
            return ActiveRoute {
                active_top_id: Some(item.name.clone()),
                active_sub_path: None,
                implied_expand: None,
            };
        }
    }
    ActiveRoute::default()
}

/// 菜单树中的第一个可导航路径（默认路由重定向目标）
pub fn fallback_path(menu: &[MenuItem]) -> Option<&str> {
    menu.first().map(|item| {
        item.submenu
            .first()
            .map_or(item.path.as_str(), |sub| sub.path.as_str())
    })
}

/// 侧边栏中可见的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry<'a> {
    /// 顶级项
    Top(&'a MenuItem),
    /// 已展开分组下的子菜单项
    Sub {
        parent: &'a MenuItem,
        item: &'a SubMenuItem,
    },
}

impl<'a> MenuEntry<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Top(item) => &item.name,
            Self::Sub { item, .. } => &item.name,
        }
    }

    pub fn path(&self) -> &'a str {
        match self {
            Self::Top(item) => &item.path,
            Self::Sub { item, .. } => &item.path,
        }
    }

    /// 缩进层级
    pub fn depth(&self) -> usize {
        match self {
            Self::Top(_) => 0,
            Self::Sub { .. } => 1,
        }
    }
}

/// 导航状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    expanded_groups: HashSet<String>,
}

impl NavigationState {
    /// 创建导航状态（不做隐式展开）
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current_path: initial_path.into(),
            expanded_groups: HashSet::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn expanded_groups(&self) -> &HashSet<String> {
        &self.expanded_groups
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded_groups.contains(group)
    }

    /// 导航到新路径
    ///
    /// 若路径属于某个分组的子菜单，该分组被并入展开集合。
    pub fn navigate(&mut self, menu: &[MenuItem], path: impl Into<String>) -> ActiveRoute {
        self.current_path = path.into();
        let route = resolve_active(menu, &self.current_path);
        if let Some(group) = &route.implied_expand {
            if self.expanded_groups.insert(group.clone()) {
                log::debug!("Group '{group}' expanded by navigation");
            }
        }
        route
    }

    /// 切换分组展开状态，返回切换后是否展开
    ///
    /// 与激活状态无关：包含当前激活项的分组同样可以收起。
    pub fn toggle_group(&mut self, group: &str) -> bool {
        if self.expanded_groups.remove(group) {
            false
        } else {
            self.expanded_groups.insert(group.to_string());
            true
        }
    }

    /// 当前路径的激活项
    pub fn active(&self, menu: &[MenuItem]) -> ActiveRoute {
        resolve_active(menu, &self.current_path)
    }

    /// 侧边栏当前可见的行（顶级项 + 已展开分组的子项）
    pub fn visible_entries<'a>(&self, menu: &'a [MenuItem]) -> Vec<MenuEntry<'a>> {
        let mut entries = Vec::new();
        for item in menu {
            entries.push(MenuEntry::Top(item));
            if item.has_submenu() && self.is_expanded(&item.name) {
                entries.extend(
                    item.submenu
                        .iter()
                        .map(|sub| MenuEntry::Sub { parent: item, item: sub }),
                );
            }
        }
        entries
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::link("仪表盘", "/dashboard"),
            MenuItem::group(
                "网关设置",
                "/gateway",
                vec![
                    SubMenuItem::new("网关状态", "/gateway/status"),
                    SubMenuItem::new("IMEI 管理", "/gateway/imei"),
                ],
            ),
            MenuItem::group(
                "指令工具",
                "/tools",
                vec![
                    SubMenuItem::new("USSD", "/tools/ussd"),
                    SubMenuItem::new("AT 指令", "/tools/at"),
                ],
            ),
        ]
    }

    #[test]
    fn resolves_submenu_entry() {
        let route = resolve_active(&sample_menu(), "/gateway/imei");
        assert_eq!(route.active_top_id.as_deref(), Some("网关设置"));
        assert_eq!(route.active_sub_path.as_deref(), Some("/gateway/imei"));
        assert_eq!(route.implied_expand.as_deref(), Some("网关设置"));
    }

    #[test]
    fn resolver_is_deterministic() {
        let menu = sample_menu();
        assert_eq!(
            resolve_active(&menu, "/tools/at"),
            resolve_active(&menu, "/tools/at")
        );
    }

    #[test]
    fn resolves_plain_link() {
        let route = resolve_active(&sample_menu(), "/dashboard");
        assert_eq!(route.active_top_id.as_deref(), Some("仪表盘"));
        assert_eq!(route.active_sub_path, None);
        assert_eq!(route.implied_expand, None);
    }

    #[test]
    fn group_own_path_activates_without_expansion() {
        let route = resolve_active(&sample_menu(), "/gateway");
        assert_eq!(route.active_top_id.as_deref(), Some("网关设置"));
        assert_eq!(route.active_sub_path, None);
        assert_eq!(route.implied_expand, None);
    }

    #[test]
    fn no_prefix_matching() {
        let route = resolve_active(&sample_menu(), "/gateway/imei/extra");
        assert!(!route.is_matched());
        assert_eq!(route, ActiveRoute::default());
    }

    #[test]
    fn unknown_path_has_no_side_effect() {
        let menu = sample_menu();
        let mut nav = NavigationState::default();
        let route = nav.navigate(&menu, "/nowhere");
        assert!(!route.is_matched());
        assert!(nav.expanded_groups().is_empty());
        assert_eq!(nav.current_path(), "/nowhere");
    }

    #[test]
    fn navigate_then_collapse_keeps_active() {
        let menu = sample_menu();
        let mut nav = NavigationState::new("/");

        let route = nav.navigate(&menu, "/gateway/imei");
        assert_eq!(route.active_sub_path.as_deref(), Some("/gateway/imei"));
        assert!(nav.is_expanded("网关设置"));
        assert_eq!(nav.expanded_groups().len(), 1);

        assert!(!nav.toggle_group("网关设置"));
        assert!(nav.expanded_groups().is_empty());
        assert_eq!(
            nav.active(&menu).active_sub_path.as_deref(),
            Some("/gateway/imei")
        );
    }

    #[test]
    fn implied_expansion_is_monotonic() {
        let menu = sample_menu();
        let mut nav = NavigationState::default();
        nav.navigate(&menu, "/gateway/status");
        nav.navigate(&menu, "/dashboard");
        nav.navigate(&menu, "/tools/ussd");
        assert!(nav.is_expanded("网关设置"));
        assert!(nav.is_expanded("指令工具"));

        // 再次导航到同一分组不会产生重复项
        nav.navigate(&menu, "/gateway/imei");
        assert_eq!(nav.expanded_groups().len(), 2);
    }

    #[test]
    fn toggle_is_symmetric_difference() {
        let mut nav = NavigationState::default();
        assert!(nav.toggle_group("指令工具"));
        assert!(nav.is_expanded("指令工具"));
        assert!(!nav.toggle_group("指令工具"));
        assert!(!nav.is_expanded("指令工具"));
    }

    #[test]
    fn visible_entries_follow_expansion() {
        let menu = sample_menu();
        let mut nav = NavigationState::default();
        assert_eq!(nav.visible_entries(&menu).len(), 3);

        nav.toggle_group("网关设置");
        let entries = nav.visible_entries(&menu);
        let paths: Vec<&str> = entries.iter().map(MenuEntry::path).collect();
        assert_eq!(
            paths,
            vec!["/dashboard", "/gateway", "/gateway/status", "/gateway/imei", "/tools"]
        );
        assert_eq!(entries[2].depth(), 1);
    }

    #[test]
    fn fallback_prefers_first_submenu_entry() {
        let menu = sample_menu();
        assert_eq!(fallback_path(&menu), Some("/dashboard"));
        assert_eq!(fallback_path(&menu[1..]), Some("/gateway/status"));
        assert_eq!(fallback_path(&[]), None);
    }
}
