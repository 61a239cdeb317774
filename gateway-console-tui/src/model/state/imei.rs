//! IMEI 管理页面状态

use gateway_console_core::state::SelectionState;
use gateway_console_core::types::{BatchOperationResult, ImeiRecord, ImeiTemplate};
use gateway_console_core::{CoreError, CoreResult};
use uuid::Uuid;

use super::ListCursor;

/// 已校验、待下发的 IMEI 改写请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImeiRequest {
    pub request_id: Uuid,
    pub terminals: Vec<String>,
    /// 规范化后的模板
    pub template: String,
}

/// IMEI 页面状态
#[derive(Debug, Default)]
pub struct ImeiState {
    pub records: Vec<ImeiRecord>,
    pub cursor: ListCursor,
    pub selection: SelectionState<String>,
    pub loading: bool,
    pub error: Option<String>,
    request_id: Option<Uuid>,
}

impl ImeiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.request_id.is_some()
    }

    pub fn set_records(&mut self, records: Vec<ImeiRecord>) {
        self.selection
            .set_all_ids(records.iter().map(|r| r.terminal.clone()).collect());
        self.records = records;
        self.cursor.clamp(self.records.len());
        self.loading = false;
        self.error = None;
    }

    pub fn current(&self) -> Option<&ImeiRecord> {
        self.records.get(self.cursor.index())
    }

    pub fn toggle_current(&mut self) -> bool {
        match self.current().map(|r| r.terminal.clone()) {
            Some(terminal) => self.selection.toggle_one(&terminal),
            None => false,
        }
    }

    /// 已被改写的终端数量
    pub fn modified_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_modified()).count()
    }

    /// 校验模板并进入等待状态
    pub fn begin_update(&mut self, template: &str) -> CoreResult<ImeiRequest> {
        if self.is_busy() {
            return Err(CoreError::Busy("update_imei".to_string()));
        }
        let terminals = self.selection.selected_in_order();
        if terminals.is_empty() {
            return Err(CoreError::EmptySelection);
        }
        let template = ImeiTemplate::parse(template)?;

        let request_id = Uuid::new_v4();
        self.request_id = Some(request_id);
        Ok(ImeiRequest {
            request_id,
            terminals,
            template: template.as_str().to_string(),
        })
    }

    /// 改写结果到达：全部成功清空选择，否则只保留失败的终端
    pub fn finish(&mut self, request_id: Uuid, result: &BatchOperationResult) -> bool {
        if self.request_id != Some(request_id) {
            return false;
        }
        self.request_id = None;
        if result.is_complete_success() {
            self.selection.clear();
        } else {
            self.selection.retain_selected(&result.failed_ids());
        }
        true
    }

    /// 请求整体失败，选择保持不变
    pub fn fail(&mut self, request_id: Uuid, reason: String) -> bool {
        if self.request_id != Some(request_id) {
            return false;
        }
        self.request_id = None;
        self.error = Some(reason);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_console_core::types::BatchFailure;

    fn record(terminal: &str) -> ImeiRecord {
        ImeiRecord {
            terminal: terminal.to_string(),
            original: "490154203237518".to_string(),
            current: "490154203237518".to_string(),
        }
    }

    fn state() -> ImeiState {
        let mut state = ImeiState::new();
        state.set_records(vec![record("M1T1"), record("M2T1"), record("M3T1")]);
        state.selection.select_all();
        state
    }

    #[test]
    fn invalid_template_is_rejected_before_dispatch() {
        let mut state = state();
        assert!(matches!(
            state.begin_update("86x"),
            Err(CoreError::ValidationError(_))
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn partial_failure_keeps_failed_terminals_selected() {
        let mut state = state();
        let request = state.begin_update("86XXXXXXXXXXXX").unwrap();
        assert_eq!(request.template, "86xxxxxxxxxxxx");

        let result = BatchOperationResult {
            succeeded: vec!["M1T1".into(), "M3T1".into()],
            failures: vec![BatchFailure {
                id: "M2T1".into(),
                reason: "write rejected".into(),
            }],
        };
        assert!(state.finish(request.request_id, &result));
        assert_eq!(state.selection.selected_in_order(), vec!["M2T1".to_string()]);
    }

    #[test]
    fn whole_failure_keeps_selection() {
        let mut state = state();
        let request = state.begin_update("86xxxxxxxxxxxx").unwrap();
        assert!(state.fail(request.request_id, "timeout".into()));
        assert_eq!(state.selection.count(), 3);
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }
}
