//! SIM 卡余额页面状态

use std::collections::HashMap;

use gateway_console_core::state::SelectionState;
use gateway_console_core::types::{BalanceQuery, SimBalance};
use gateway_console_core::{CoreError, CoreResult};
use uuid::Uuid;

use super::ListCursor;

/// SIM 卡页面状态
#[derive(Debug, Default)]
pub struct SimState {
    pub cursor: ListCursor,
    /// 终端选择
    pub selection: SelectionState<String>,
    /// 终端 -> 最近一次查询到的余额
    pub balances: HashMap<String, SimBalance>,
    pub error: Option<String>,
    request_id: Option<Uuid>,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.request_id.is_some()
    }

    /// 同步终端列表
    pub fn set_terminals(&mut self, terminals: Vec<String>) {
        self.cursor.clamp(terminals.len());
        self.balances.retain(|terminal, _| terminals.contains(terminal));
        self.selection.set_all_ids(terminals);
    }

    pub fn current(&self) -> Option<&String> {
        self.selection.all_ids().get(self.cursor.index())
    }

    pub fn toggle_current(&mut self) -> bool {
        match self.current().cloned() {
            Some(terminal) => self.selection.toggle_one(&terminal),
            None => false,
        }
    }

    pub fn balance(&self, terminal: &str) -> Option<&SimBalance> {
        self.balances.get(terminal)
    }

    /// 按当前选择构造查询
    pub fn selected_query(&self) -> CoreResult<BalanceQuery> {
        let terminals = self.selection.selected_in_order();
        if terminals.is_empty() {
            Err(CoreError::EmptySelection)
        } else {
            Ok(BalanceQuery::Terminals(terminals))
        }
    }

    /// 开始查询
    pub fn begin_query(&mut self, query: &BalanceQuery) -> CoreResult<Uuid> {
        if self.is_busy() {
            return Err(CoreError::Busy("query_balance".to_string()));
        }
        if query.is_empty() {
            return Err(CoreError::ValidationError(
                "balance query has no target".to_string(),
            ));
        }
        let request_id = Uuid::new_v4();
        self.request_id = Some(request_id);
        self.error = None;
        Ok(request_id)
    }

    /// 查询结果到达，返回更新的条数；过期请求返回 `None`
    pub fn finish(&mut self, request_id: Uuid, balances: Vec<SimBalance>) -> Option<usize> {
        if self.request_id != Some(request_id) {
            return None;
        }
        self.request_id = None;
        let count = balances.len();
        for balance in balances {
            self.balances.insert(balance.terminal.clone(), balance);
        }
        Some(count)
    }

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

    fn balance(terminal: &str, amount: f64) -> SimBalance {
        SimBalance {
            terminal: terminal.to_string(),
            operator: "China Mobile".to_string(),
            phone_number: None,
            balance: amount,
            currency: "CNY".to_string(),
            queried_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn query_lifecycle_keeps_latest_balances() {
        let mut state = SimState::new();
        state.set_terminals(vec!["M1T1".into(), "M2T1".into()]);
        assert!(state.selected_query().is_err());

        state.selection.select_all();
        let query = state.selected_query().unwrap();
        let id = state.begin_query(&query).unwrap();
        assert!(state.begin_query(&query).is_err());
        assert_eq!(state.finish(Uuid::new_v4(), vec![]), None);
        assert_eq!(state.finish(id, vec![balance("M2T1", 3.5)]), Some(1));
        assert_eq!(state.balance("M2T1").map(|b| b.balance), Some(3.5));
        assert!(state.balance("M1T1").is_none());
    }

    #[test]
    fn operator_query_must_name_an_operator() {
        let mut state = SimState::new();
        let err = state
            .begin_query(&BalanceQuery::Operator("  ".to_string()))
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }
}
