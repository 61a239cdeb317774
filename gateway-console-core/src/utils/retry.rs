//! 网关调用的超时与重试
//!
//! 每次调用都包裹在 `tokio::time::timeout` 中；
//! 只有瞬时错误（网络、超时、设备忙）会按指数退避重试，业务错误直接返回。

use std::future::Future;
use std::time::Duration;

use crate::error::{CoreError, CoreResult, GatewayError, GatewayResult};

/// 网关指令策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPolicy {
    /// 单次调用超时
    pub timeout: Duration,
    /// 最大重试次数（0 表示不重试）
    pub max_retries: u32,
    /// 首次退避延迟
    pub base_delay: Duration,
    /// 退避延迟上限
    pub max_delay: Duration,
}

impl Default for CommandPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_retries: 2,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl CommandPolicy {
    /// 不重试的同等策略（用于非幂等操作）
    #[must_use]
    pub fn without_retry(self) -> Self {
        Self {
            max_retries: 0,
            ..self
        }
    }

    /// 计算第 `attempt` 次重试前的退避延迟
    ///
    /// base, 2*base, 4*base, ...，不超过 `max_delay`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let delay_ms = base_ms.saturating_mul(1_u64 << capped_attempt);
        let max_ms = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(delay_ms.min(max_ms))
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// 单次尝试失败的原因
enum AttemptError {
    /// 本地计时器到期
    Elapsed,
    /// 网关返回错误
    Gateway(GatewayError),
}

impl AttemptError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Elapsed => true,
            Self::Gateway(e) => e.is_retryable(),
        }
    }
}

/// 在策略约束下执行网关调用
///
/// # Arguments
/// * `policy` - 超时与重试策略
/// * `operation` - 操作名（用于日志与超时错误）
/// * `call` - 每次尝试都会重新调用以构造新的 future
///
/// # Returns
/// * `Ok(T)` - 某次尝试成功
/// * `Err(CoreError::Timeout)` - 最后一次尝试因超时失败
/// * `Err(CoreError::Gateway)` - 不可重试的错误，或重试耗尽后的最后一个错误
pub async fn execute_with_retry<T, F, Fut>(
    policy: &CommandPolicy,
    operation: &str,
    mut call: F,
) -> CoreResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = GatewayResult<T>>,
{
    let mut attempt = 0;

    loop {
        let outcome = match tokio::time::timeout(policy.timeout, call()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => AttemptError::Gateway(e),
            Err(_) => AttemptError::Elapsed,
        };

        if attempt < policy.max_retries && outcome.is_retryable() {
            let delay = policy.backoff_delay(attempt);
            log::warn!(
                "[{operation}] attempt {}/{} failed, retrying in {:.1}s: {}",
                attempt + 1,
                policy.max_retries + 1,
                delay.as_secs_f32(),
                describe(&outcome)
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
            continue;
        }

        return Err(match outcome {
            AttemptError::Elapsed => CoreError::Timeout {
                operation: operation.to_string(),
                after_ms: policy.timeout_ms(),
            },
            AttemptError::Gateway(e) => CoreError::Gateway(e),
        });
    }
}

fn describe(outcome: &AttemptError) -> String {
    match outcome {
        AttemptError::Elapsed => "timed out".to_string(),
        AttemptError::Gateway(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy(max_retries: u32) -> CommandPolicy {
        CommandPolicy {
            timeout: Duration::from_millis(50),
            max_retries,
            base_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(40),
        }
    }

    fn network_error() -> GatewayError {
        GatewayError::Network {
            gateway: "test".into(),
            detail: "reset".into(),
        }
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_doubles_until_cap() {
        let p = fast_policy(3);
        assert_eq!(p.backoff_delay(0), Duration::from_millis(10));
        assert_eq!(p.backoff_delay(1), Duration::from_millis(20));
        assert_eq!(p.backoff_delay(2), Duration::from_millis(40));
        assert_eq!(p.backoff_delay(3), Duration::from_millis(40));
        assert_eq!(p.backoff_delay(64), Duration::from_millis(40));
    }

    #[test]
    fn without_retry_keeps_timeout() {
        let p = fast_policy(3).without_retry();
        assert_eq!(p.max_retries, 0);
        assert_eq!(p.timeout, Duration::from_millis(50));
    }

    // ---- execute_with_retry ----

    #[tokio::test(start_paused = true)]
    async fn retries_transient_errors_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result = execute_with_retry(&fast_policy(2), "list_ports", || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(network_error())
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn business_errors_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: CoreResult<()> = execute_with_retry(&fast_policy(3), "reboot", || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::Rejected {
                    gateway: "test".into(),
                    raw_message: None,
                })
            }
        })
        .await;

        assert!(matches!(result, Err(CoreError::Gateway(GatewayError::Rejected { .. }))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_call_becomes_timeout_error() {
        let result: CoreResult<()> =
            execute_with_retry(&fast_policy(1), "send_at_command", || async {
                std::future::pending::<GatewayResult<()>>().await
            })
            .await;

        match result {
            Err(CoreError::Timeout {
                operation,
                after_ms,
            }) => {
                assert_eq!(operation, "send_at_command");
                assert_eq!(after_ms, 50);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_return_last_gateway_error() {
        let result: CoreResult<()> =
            execute_with_retry(&fast_policy(1), "list_ports", || async { Err(network_error()) })
                .await;
        assert!(matches!(result, Err(CoreError::Gateway(GatewayError::Network { .. }))));
    }
}
