//! USSD / AT 指令页面状态
//!
//! 每个指令页面各自持有终端选择和最近一次指令的响应表。
//! 发送后立即为每个终端显示一条 Pending 行，结果回来后整体替换。

use gateway_console_core::services::{validate_command, CommandService};
use gateway_console_core::state::SelectionState;
use gateway_console_core::types::{CommandKind, ResponseStatus, TerminalResponse};
use gateway_console_core::{CoreError, CoreResult};
use uuid::Uuid;

use super::ListCursor;

/// 已校验、待下发的指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub request_id: Uuid,
    pub kind: CommandKind,
    pub terminals: Vec<String>,
    pub command: String,
}

/// 指令页面状态
#[derive(Debug)]
pub struct CommandState {
    pub kind: CommandKind,
    pub cursor: ListCursor,
    /// 终端选择
    pub selection: SelectionState<String>,
    /// 最近一次下发的指令
    pub last_command: Option<String>,
    /// 最近一次指令的响应（按终端顺序）
    pub responses: Vec<TerminalResponse>,
    request_id: Option<Uuid>,
}

impl CommandState {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            cursor: ListCursor::default(),
            selection: SelectionState::new(),
            last_command: None,
            responses: Vec::new(),
            request_id: None,
        }
    }

    /// 是否有指令在等待响应
    pub fn is_busy(&self) -> bool {
        self.request_id.is_some()
    }

    /// 同步终端列表
    pub fn set_terminals(&mut self, terminals: Vec<String>) {
        self.cursor.clamp(terminals.len());
        self.selection.set_all_ids(terminals);
    }

    /// 光标所在终端
    pub fn current(&self) -> Option<&String> {
        self.selection.all_ids().get(self.cursor.index())
    }

    pub fn toggle_current(&mut self) -> bool {
        match self.current().cloned() {
            Some(terminal) => self.selection.toggle_one(&terminal),
            None => false,
        }
    }

    /// 终端在最近一次指令中的响应
    pub fn response_for(&self, terminal: &str) -> Option<&TerminalResponse> {
        self.responses.iter().find(|r| r.terminal == terminal)
    }

    /// 校验指令并进入等待状态
    pub fn begin(&mut self, command: &str) -> CoreResult<CommandRequest> {
        if self.is_busy() {
            return Err(CoreError::Busy(self.kind.name().to_string()));
        }
        let terminals = self.selection.selected_in_order();
        if terminals.is_empty() {
            return Err(CoreError::EmptySelection);
        }
        let command = validate_command(self.kind, command)?;

        let request_id = Uuid::new_v4();
        self.responses = CommandService::pending_rows(&terminals);
        self.last_command = Some(command.clone());
        self.request_id = Some(request_id);
        Ok(CommandRequest {
            request_id,
            kind: self.kind,
            terminals,
            command,
        })
    }

    /// 响应到达；过期请求返回 `false`
    pub fn finish(&mut self, request_id: Uuid, responses: Vec<TerminalResponse>) -> bool {
        if !self.take_if_current(request_id) {
            return false;
        }
        self.responses = responses;
        true
    }

    /// 请求整体失败：所有等待中的行记为失败
    pub fn fail(&mut self, request_id: Uuid, reason: &str) -> bool {
        if !self.take_if_current(request_id) {
            return false;
        }
        for row in &mut self.responses {
            if row.status == ResponseStatus::Pending {
                *row = TerminalResponse::failed(row.terminal.clone(), reason);
            }
        }
        true
    }

    /// 成功 / 失败行数
    pub fn summary(&self) -> (usize, usize) {
        let ok = self
            .responses
            .iter()
            .filter(|r| r.status == ResponseStatus::Success)
            .count();
        let failed = self
            .responses
            .iter()
            .filter(|r| r.status == ResponseStatus::Failed)
            .count();
        (ok, failed)
    }

    fn take_if_current(&mut self, request_id: Uuid) -> bool {
        if self.request_id == Some(request_id) {
            self.request_id = None;
            true
        } else {
            log::debug!("Ignoring stale {} result [{request_id}]", self.kind.name());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CommandState {
        let mut state = CommandState::new(CommandKind::Ussd);
        state.set_terminals(vec!["M1T1".into(), "M2T1".into(), "M3T1".into()]);
        state
    }

    #[test]
    fn begin_requires_selection_and_valid_command() {
        let mut state = state();
        assert!(matches!(state.begin("*100#"), Err(CoreError::EmptySelection)));

        state.toggle_current();
        assert!(matches!(
            state.begin("100"),
            Err(CoreError::ValidationError(_))
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn pending_rows_then_results() {
        let mut state = state();
        state.selection.select_all();
        let request = state.begin(" *100# ").unwrap();
        assert_eq!(request.command, "*100#");
        assert_eq!(state.responses.len(), 3);
        assert!(matches!(state.begin("*100#"), Err(CoreError::Busy(_))));

        let rows = vec![
            TerminalResponse::success("M1T1", "Balance: 5.00"),
            TerminalResponse::failed("M2T1", "no response"),
            TerminalResponse::success("M3T1", "Balance: 1.00"),
        ];
        assert!(!state.finish(Uuid::new_v4(), rows.clone()));
        assert!(state.finish(request.request_id, rows));
        assert_eq!(state.summary(), (2, 1));
        assert!(!state.is_busy());
    }

    #[test]
    fn whole_call_failure_fails_pending_rows() {
        let mut state = state();
        state.toggle_current();
        let request = state.begin("*100#").unwrap();
        assert!(state.fail(request.request_id, "gateway offline"));
        let row = state.response_for("M1T1").unwrap();
        assert_eq!(row.status, ResponseStatus::Failed);
        assert_eq!(row.content, "gateway offline");
    }
}
