//! 侧边栏状态
//!
//! 在核心库的 `NavigationState` 之上加一个光标：光标指向可见行中的一行，
//! 确认时分组切换展开，链接则导航。

use gateway_console_core::state::{fallback_path, ActiveRoute, MenuEntry, MenuItem, NavigationState};

use super::menu::console_menu;

/// 侧边栏确认后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// 分组展开状态已切换
    Toggled { group: String, expanded: bool },
    /// 需要导航到该路径
    Open(String),
}

/// 侧边栏状态
#[derive(Debug, Clone)]
pub struct SidebarState {
    menu: Vec<MenuItem>,
    nav: NavigationState,
    cursor: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::with_menu(console_menu())
    }

    pub fn with_menu(menu: Vec<MenuItem>) -> Self {
        let initial = fallback_path(&menu).unwrap_or("/").to_string();
        let mut nav = NavigationState::new(initial.clone());
        nav.navigate(&menu, initial);
        Self {
            menu,
            nav,
            cursor: 0,
        }
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_path(&self) -> &str {
        self.nav.current_path()
    }

    /// 当前可见的行
    pub fn entries(&self) -> Vec<MenuEntry<'_>> {
        self.nav.visible_entries(&self.menu)
    }

    /// 当前激活项
    pub fn active(&self) -> ActiveRoute {
        self.nav.active(&self.menu)
    }

    /// 光标上移
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 光标下移
    pub fn select_next(&mut self) {
        let len = self.entries().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.entries().len().saturating_sub(1);
    }

    /// 确认光标所在行
    pub fn confirm(&mut self) -> Option<SidebarAction> {
        let (group, path) = {
            let entries = self.entries();
            let entry = entries.get(self.cursor)?;
            match entry {
                MenuEntry::Top(item) if item.has_submenu() => (Some(item.name.clone()), None),
                other => (None, Some(other.path().to_string())),
            }
        };

        if let Some(group) = group {
            let expanded = self.nav.toggle_group(&group);
            self.clamp_cursor();
            return Some(SidebarAction::Toggled { group, expanded });
        }
        path.map(SidebarAction::Open)
    }

    /// 导航到路径；路径不在菜单中时退回第一个菜单项
    ///
    /// 返回实际生效的路径。
    pub fn navigate(&mut self, path: &str) -> String {
        let mut route = self.nav.navigate(&self.menu, path);
        if !route.is_matched() {
            if let Some(fallback) = fallback_path(&self.menu).map(str::to_string) {
                log::warn!("Unknown route '{path}', redirecting to '{fallback}'");
                route = self.nav.navigate(&self.menu, fallback);
            }
        }

        let target = route
            .active_sub_path
            .clone()
            .unwrap_or_else(|| self.nav.current_path().to_string());
        if let Some(index) = self.entries().iter().position(|e| e.path() == target) {
            self.cursor = index;
        }
        self.nav.current_path().to_string()
    }

    fn clamp_cursor(&mut self) {
        let len = self.entries().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}
