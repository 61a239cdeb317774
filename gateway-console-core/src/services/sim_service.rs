//! SIM 卡余额查询服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{BalanceQuery, SimBalance};

/// SIM 卡服务
pub struct SimService {
    ctx: Arc<ServiceContext>,
}

impl SimService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 查询余额，结果按终端排序
    pub async fn query_balance(&self, query: &BalanceQuery) -> CoreResult<Vec<SimBalance>> {
        if query.is_empty() {
            return Err(CoreError::ValidationError(
                "balance query needs at least one terminal or an operator".to_string(),
            ));
        }

        let mut balances = self
            .ctx
            .call("query_balance", true, || self.ctx.client.query_balance(query))
            .await?;
        balances.sort_by(|a, b| a.terminal.cmp(&b.terminal));
        Ok(balances)
    }
}
