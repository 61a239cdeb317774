//! 端口列表状态

use std::collections::HashMap;

use chrono::{DateTime, Local};
use gateway_console_core::state::{ActionBar, DialogState, SelectionState};
use gateway_console_core::types::{Port, PortStatus};

use super::ListCursor;

/// 端口列表页面状态
#[derive(Debug, Default)]
pub struct PortsState {
    /// 端口列表（设备返回顺序）
    pub ports: Vec<Port>,
    pub cursor: ListCursor,
    /// 批量选择（按端口 ID）
    pub selection: SelectionState<String>,
    /// 浮动操作栏
    pub action_bar: ActionBar,
    /// 端口编辑对话框
    pub editor: DialogState<Port>,
    /// 本地显示名称（端口 ID -> 名称），刷新后重新套用
    aliases: HashMap<String, String>,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 上次成功刷新的时间
    pub last_refresh: Option<DateTime<Local>>,
}

impl PortsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 光标所在端口
    pub fn current(&self) -> Option<&Port> {
        self.ports.get(self.cursor.index())
    }

    pub fn select_previous(&mut self) {
        self.cursor.previous();
    }

    pub fn select_next(&mut self) {
        self.cursor.next(self.ports.len());
    }

    pub fn select_first(&mut self) {
        self.cursor.first();
    }

    pub fn select_last(&mut self) {
        self.cursor.last(self.ports.len());
    }

    /// 替换端口列表
    ///
    /// 选择集合同步为新的行集合，已删除端口的选中项被剔除。
    pub fn set_ports(&mut self, mut ports: Vec<Port>) {
        for port in &mut ports {
            if let Some(alias) = self.aliases.get(&port.id) {
                port.name.clone_from(alias);
            }
        }
        self.selection
            .set_all_ids(ports.iter().map(|p| p.id.clone()).collect());
        self.ports = ports;
        self.cursor.clamp(self.ports.len());
        self.loading = false;
        self.error = None;
        self.last_refresh = Some(Local::now());
    }

    /// 全部终端地址（指令、SIM 页面的行）
    pub fn terminals(&self) -> Vec<String> {
        self.ports.iter().map(|p| p.terminal.clone()).collect()
    }

    /// 勾选 / 取消勾选光标所在行
    pub fn toggle_current(&mut self) -> bool {
        match self.current().map(|p| p.id.clone()) {
            Some(id) => self.selection.toggle_one(&id),
            None => false,
        }
    }

    /// 以光标所在端口打开编辑对话框
    pub fn open_editor(&mut self) -> bool {
        match self.ports.get(self.cursor.index()) {
            Some(port) => {
                self.editor.open(port);
                true
            }
            None => false,
        }
    }

    /// 保存编辑对话框，把草稿写回列表
    ///
    /// 返回提交的端口；端口在编辑期间被删除时草稿被丢弃。
    pub fn commit_editor(&mut self) -> Option<Port> {
        let draft = self.editor.save()?;
        let target = self.ports.iter_mut().find(|p| p.id == draft.id)?;
        self.aliases.insert(draft.id.clone(), draft.name.clone());
        *target = draft.clone();
        Some(draft)
    }

    /// 各状态的端口数量（仅包含数量非零的状态）
    pub fn status_counts(&self) -> Vec<(PortStatus, usize)> {
        [
            PortStatus::Online,
            PortStatus::Offline,
            PortStatus::Disabled,
            PortStatus::Rebooting,
            PortStatus::Error,
        ]
        .into_iter()
        .map(|status| {
            (
                status,
                self.ports.iter().filter(|p| p.status == status).count(),
            )
        })
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(id: &str, status: PortStatus) -> Port {
        Port {
            id: id.to_string(),
            name: format!("Port {id}"),
            terminal: format!("{id}T1"),
            model: "EC20".to_string(),
            imei: String::new(),
            status,
        }
    }

    fn state() -> PortsState {
        let mut state = PortsState::new();
        state.set_ports(vec![
            port("M1", PortStatus::Online),
            port("M2", PortStatus::Offline),
            port("M3", PortStatus::Online),
        ]);
        state
    }

    #[test]
    fn reload_prunes_selection_of_deleted_ports() {
        let mut state = state();
        state.selection.select_all();
        state.select_last();

        state.set_ports(vec![port("M1", PortStatus::Online)]);
        assert_eq!(state.selection.selected_in_order(), vec!["M1".to_string()]);
        assert_eq!(state.cursor.index(), 0);
    }

    #[test]
    fn rename_survives_reload() {
        let mut state = state();
        state.select_next();
        assert!(state.open_editor());
        if let Some(draft) = state.editor.draft_mut() {
            draft.name = "主卡".to_string();
        }
        assert_eq!(state.ports[1].name, "Port M2");

        let saved = state.commit_editor().unwrap();
        assert_eq!(saved.name, "主卡");
        assert!(!state.editor.is_open());

        state.set_ports(vec![port("M2", PortStatus::Online)]);
        assert_eq!(state.ports[0].name, "主卡");
    }

    #[test]
    fn cancelled_edit_leaves_list_untouched() {
        let mut state = state();
        state.open_editor();
        if let Some(draft) = state.editor.draft_mut() {
            draft.name.clear();
        }
        state.editor.cancel();
        assert_eq!(state.ports[0].name, "Port M1");
        assert!(state.commit_editor().is_none());
    }

    #[test]
    fn counts_by_status() {
        let state = state();
        assert_eq!(
            state.status_counts(),
            vec![(PortStatus::Online, 2), (PortStatus::Offline, 1)]
        );
    }
}
