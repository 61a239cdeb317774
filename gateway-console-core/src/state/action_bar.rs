//! 浮动批量操作栏
//!
//! 有选中项时显示；同一时间最多一个进行中的操作。
//! 操作完成后：全部成功清空选择，部分失败只保留失败项，整体失败保持选择不变。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::state::selection::SelectionState;
use crate::types::BatchOperationResult;

/// 批量操作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "policy", rename_all = "camelCase")]
pub enum BulkAction {
    Enable,
    Disable,
    Reboot,
    Delete,
    /// 应用指定的策略模板
    ApplyPolicy(String),
}

impl BulkAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Reboot => "reboot",
            Self::Delete => "delete",
            Self::ApplyPolicy(_) => "apply_policy",
        }
    }

    /// 是否需要二次确认
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Reboot | Self::Delete)
    }

    /// 重复执行是否安全（决定是否允许重试）
    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Enable | Self::Disable | Self::ApplyPolicy(_))
    }
}

/// 已提交、等待结果的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub request_id: Uuid,
    pub action: BulkAction,
    /// 按行顺序排列的目标 ID
    pub ids: Vec<String>,
}

/// 操作完成后对选择状态的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 全部成功，选择已清空
    Cleared,
    /// 部分失败，只保留失败项
    PartiallyFailed { failed: usize },
    /// 整体失败，选择未变
    Unchanged,
    /// 过期的结果（不是当前进行中的请求），已忽略
    Stale,
}

/// 操作栏状态
#[derive(Debug, Clone, Default)]
pub struct ActionBar {
    pending: Option<PendingAction>,
}

impl ActionBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 操作栏是否显示
    pub fn is_visible(selection: &SelectionState<String>) -> bool {
        selection.any_selected()
    }

    /// 是否有进行中的操作（触发按钮应禁用）
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// 开始一个批量操作
    ///
    /// 返回的 `PendingAction` 交给后台执行；结果回来后调用 [`finish`](Self::finish)
    /// 或 [`fail`](Self::fail)。
    pub fn begin(
        &mut self,
        action: BulkAction,
        selection: &SelectionState<String>,
    ) -> CoreResult<PendingAction> {
        if let Some(pending) = &self.pending {
            return Err(CoreError::Busy(pending.action.name().to_string()));
        }
        let ids = selection.selected_in_order();
        if ids.is_empty() {
            return Err(CoreError::EmptySelection);
        }

        let pending = PendingAction {
            request_id: Uuid::new_v4(),
            action,
            ids,
        };
        log::debug!(
            "Bulk action '{}' started on {} row(s) [{}]",
            pending.action.name(),
            pending.ids.len(),
            pending.request_id
        );
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// 操作返回逐项结果
    pub fn finish(
        &mut self,
        request_id: Uuid,
        result: &BatchOperationResult,
        selection: &mut SelectionState<String>,
    ) -> ActionOutcome {
        if !self.take_if_current(request_id) {
            return ActionOutcome::Stale;
        }
        if result.failures.is_empty() {
            selection.clear();
            ActionOutcome::Cleared
        } else {
            selection.retain_selected(&result.failed_ids());
            ActionOutcome::PartiallyFailed {
                failed: result.failed_count(),
            }
        }
    }

    /// 整体调用失败（超时、网络错误等）
    pub fn fail(&mut self, request_id: Uuid) -> ActionOutcome {
        if self.take_if_current(request_id) {
            ActionOutcome::Unchanged
        } else {
            ActionOutcome::Stale
        }
    }

    /// 用户关闭操作栏：清空选择（进行中时无效）
    pub fn dismiss(&self, selection: &mut SelectionState<String>) -> bool {
        if self.is_busy() {
            return false;
        }
        selection.clear();
        true
    }

    fn take_if_current(&mut self, request_id: Uuid) -> bool {
        match &self.pending {
            Some(p) if p.request_id == request_id => {
                self.pending = None;
                true
            }
            _ => {
                log::debug!("Ignoring stale bulk result [{request_id}]");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchFailure;

    fn selection() -> SelectionState<String> {
        let mut s = SelectionState::with_ids(vec!["M1".into(), "M2".into(), "M3".into()]);
        s.select_all();
        s
    }

    #[test]
    fn begin_requires_selection() {
        let mut bar = ActionBar::new();
        let empty = SelectionState::with_ids(vec!["M1".to_string()]);
        assert!(matches!(
            bar.begin(BulkAction::Reboot, &empty),
            Err(CoreError::EmptySelection)
        ));
        assert!(!bar.is_busy());
    }

    #[test]
    fn second_action_is_rejected_while_pending() {
        let mut bar = ActionBar::new();
        let sel = selection();
        let first = bar.begin(BulkAction::Enable, &sel).unwrap();
        assert_eq!(first.ids, vec!["M1", "M2", "M3"]);
        assert!(matches!(
            bar.begin(BulkAction::Disable, &sel),
            Err(CoreError::Busy(_))
        ));
    }

    #[test]
    fn full_success_clears_selection() {
        let mut bar = ActionBar::new();
        let mut sel = selection();
        let pending = bar.begin(BulkAction::Enable, &sel).unwrap();
        let result = BatchOperationResult::all_succeeded(&pending.ids);

        assert_eq!(
            bar.finish(pending.request_id, &result, &mut sel),
            ActionOutcome::Cleared
        );
        assert!(!sel.any_selected());
        assert!(!bar.is_busy());
    }

    #[test]
    fn partial_failure_keeps_failed_rows_selected() {
        let mut bar = ActionBar::new();
        let mut sel = selection();
        let pending = bar.begin(BulkAction::Reboot, &sel).unwrap();
        let result = BatchOperationResult {
            succeeded: vec!["M1".into(), "M3".into()],
            failures: vec![BatchFailure {
                id: "M2".into(),
                reason: "busy".into(),
            }],
        };

        let outcome = bar.finish(pending.request_id, &result, &mut sel);
        assert_eq!(outcome, ActionOutcome::PartiallyFailed { failed: 1 });
        assert_eq!(sel.selected_in_order(), vec!["M2"]);
    }

    #[test]
    fn whole_call_failure_keeps_selection() {
        let mut bar = ActionBar::new();
        let sel = selection();
        let pending = bar.begin(BulkAction::Delete, &sel).unwrap();
        assert_eq!(bar.fail(pending.request_id), ActionOutcome::Unchanged);
        assert_eq!(sel.count(), 3);
        assert!(!bar.is_busy());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut bar = ActionBar::new();
        let mut sel = selection();
        let pending = bar.begin(BulkAction::Enable, &sel).unwrap();
        let result = BatchOperationResult::all_succeeded(&pending.ids);

        assert_eq!(
            bar.finish(Uuid::new_v4(), &result, &mut sel),
            ActionOutcome::Stale
        );
        assert!(bar.is_busy());
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn dismiss_is_blocked_while_busy() {
        let mut bar = ActionBar::new();
        let mut sel = selection();
        let pending = bar.begin(BulkAction::Enable, &sel).unwrap();
        assert!(!bar.dismiss(&mut sel));
        bar.fail(pending.request_id);
        assert!(bar.dismiss(&mut sel));
        assert!(!ActionBar::is_visible(&sel));
    }

    #[test]
    fn destructive_actions_need_confirmation() {
        assert!(BulkAction::Delete.is_destructive());
        assert!(!BulkAction::ApplyPolicy("default".into()).is_destructive());
        assert!(!BulkAction::Reboot.is_idempotent());
    }
}
