//! AT / USSD 指令下发服务

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::services::{require_selection, ServiceContext};
use crate::types::{CommandKind, TerminalResponse};

/// USSD 代码：以 `*` 或 `#` 开头，以 `#` 结尾，中间只含数字、`*`、`#`
const USSD_PATTERN: &str = r"^[*#][0-9*#]*#$";

static USSD_CODE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(USSD_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("USSD pattern failed to compile, using character check: {e}");
        None
    }
});

/// 单条指令长度上限（模块 AT 缓冲区）
const MAX_COMMAND_LEN: usize = 256;

/// 校验并规范化指令
///
/// # Returns
/// 去除首尾空白后的指令
pub fn validate_command(kind: CommandKind, command: &str) -> CoreResult<String> {
    let command = command.trim();
    if command.is_empty() {
        return Err(CoreError::ValidationError(format!(
            "{} command must not be empty",
            kind.name()
        )));
    }
    if command.len() > MAX_COMMAND_LEN {
        return Err(CoreError::ValidationError(format!(
            "{} command exceeds {MAX_COMMAND_LEN} characters",
            kind.name()
        )));
    }

    let valid = match kind {
        CommandKind::At => command
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("AT")),
        CommandKind::Ussd => is_ussd_code(command),
    };
    if !valid {
        let hint = match kind {
            CommandKind::At => "AT commands must start with 'AT'",
            CommandKind::Ussd => "USSD codes look like *100#",
        };
        return Err(CoreError::ValidationError(format!(
            "invalid {} command '{command}': {hint}",
            kind.name()
        )));
    }
    Ok(command.to_string())
}

fn is_ussd_code(command: &str) -> bool {
    match USSD_CODE.as_ref() {
        Some(re) => re.is_match(command),
        None => matches_ussd_grammar(command),
    }
}

/// 与 `USSD_PATTERN` 等价的逐字符检查
fn matches_ussd_grammar(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() >= 2
        && matches!(bytes.first(), Some(b'*' | b'#'))
        && bytes.last() == Some(&b'#')
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b'*' | b'#'))
}

/// 指令下发服务
pub struct CommandService {
    ctx: Arc<ServiceContext>,
}

impl CommandService {
    /// 创建指令服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 下发前展示的占位行（每个终端一条 `Pending`）
    pub fn pending_rows(terminals: &[String]) -> Vec<TerminalResponse> {
        terminals
            .iter()
            .map(|t| TerminalResponse::pending(t.clone()))
            .collect()
    }

    /// 向终端下发指令
    ///
    /// 校验失败返回 `Err`；网关调用整体失败时不返回错误，
    /// 而是为每个终端生成一条 `Failed` 响应，原因写入内容。
    /// 返回结果按 `terminals` 的顺序排列，设备未响应的终端同样记为失败。
    pub async fn send(
        &self,
        kind: CommandKind,
        terminals: &[String],
        command: &str,
    ) -> CoreResult<Vec<TerminalResponse>> {
        require_selection(terminals)?;
        let command = validate_command(kind, command)?;
        log::info!(
            "[{}] Sending {} '{command}' to {} terminal(s)",
            self.ctx.gateway_name(),
            kind.name(),
            terminals.len()
        );

        let operation = match kind {
            CommandKind::At => "send_at_command",
            CommandKind::Ussd => "send_ussd",
        };
        let outcome = self
            .ctx
            .call(operation, false, || match kind {
                CommandKind::At => self.ctx.client.send_at_command(terminals, &command),
                CommandKind::Ussd => self.ctx.client.send_ussd(terminals, &command),
            })
            .await;

        let responses = match outcome {
            Ok(responses) => align_responses(terminals, responses),
            Err(e) => {
                let reason = e.to_string();
                terminals
                    .iter()
                    .map(|t| TerminalResponse::failed(t.clone(), reason.clone()))
                    .collect()
            }
        };
        Ok(responses)
    }
}

/// 按请求顺序对齐响应，缺失的终端补一条失败记录
fn align_responses(
    terminals: &[String],
    mut responses: Vec<TerminalResponse>,
) -> Vec<TerminalResponse> {
    terminals
        .iter()
        .map(|t| {
            responses
                .iter()
                .position(|r| &r.terminal == t)
                .map_or_else(
                    || TerminalResponse::failed(t.clone(), "no response"),
                    |idx| responses.swap_remove(idx),
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::test_utils::{create_test_context, ids, MockGatewayClient};
    use crate::types::ResponseStatus;

    fn service(mock: MockGatewayClient) -> CommandService {
        let (_, ctx) = create_test_context(mock);
        CommandService::new(ctx)
    }

    #[test]
    fn validates_at_commands() {
        assert_eq!(
            validate_command(CommandKind::At, "  AT+CSQ ").unwrap(),
            "AT+CSQ"
        );
        assert!(validate_command(CommandKind::At, "at+cops?").is_ok());
        assert!(validate_command(CommandKind::At, "CSQ").is_err());
        assert!(validate_command(CommandKind::At, "   ").is_err());
    }

    #[test]
    fn validates_ussd_codes() {
        assert!(validate_command(CommandKind::Ussd, "*100#").is_ok());
        assert!(validate_command(CommandKind::Ussd, "#21#").is_ok());
        assert!(validate_command(CommandKind::Ussd, "*100").is_err());
        assert!(validate_command(CommandKind::Ussd, "*10a#").is_err());
    }

    #[test]
    fn ussd_pattern_compiles() {
        assert!(Regex::new(USSD_PATTERN).is_ok());
        assert!(USSD_CODE.is_some());
    }

    #[test]
    fn character_check_agrees_with_pattern() {
        let re = Regex::new(USSD_PATTERN).unwrap();
        for code in ["*100#", "#21#", "**21*123#", "*#", "#", "*100", "100#", "*10a#", "", "*1 0#"] {
            assert_eq!(matches_ussd_grammar(code), re.is_match(code), "{code:?}");
        }
    }

    #[test]
    fn overly_long_commands_are_rejected() {
        let long = format!("AT{}", "X".repeat(MAX_COMMAND_LEN));
        assert!(matches!(
            validate_command(CommandKind::At, &long),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn pending_rows_cover_every_terminal() {
        let rows = CommandService::pending_rows(&ids(&["M1", "M2"]));
        assert!(rows.iter().all(|r| r.status == ResponseStatus::Pending));
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn missing_responses_become_failed_rows() {
        let svc = service(MockGatewayClient::with_ports(&["M1", "M2", "M3"]).fail_port("M2"));
        let rows = svc
            .send(CommandKind::Ussd, &ids(&["M3", "M2", "M1"]), "*100#")
            .await
            .unwrap();

        let terminals: Vec<&str> = rows.iter().map(|r| r.terminal.as_str()).collect();
        assert_eq!(terminals, vec!["M3", "M2", "M1"]);
        assert_eq!(rows[0].status, ResponseStatus::Success);
        assert_eq!(rows[1].status, ResponseStatus::Failed);
        assert_eq!(rows[1].content, "no response");
    }

    #[tokio::test]
    async fn whole_call_failure_marks_every_terminal_failed() {
        let mock = MockGatewayClient::with_ports(&["M1", "M2"]).fail_next_calls(
            1,
            GatewayError::Rejected {
                gateway: "mock".into(),
                raw_message: Some("SIM locked".into()),
            },
        );
        let svc = service(mock);

        let rows = svc
            .send(CommandKind::At, &ids(&["M1", "M2"]), "AT+CSQ")
            .await
            .unwrap();
        assert!(rows.iter().all(|r| r.status == ResponseStatus::Failed));
        assert!(rows[0].content.contains("SIM locked"));
    }

    #[tokio::test]
    async fn invalid_command_never_reaches_gateway() {
        let (mock, ctx) = create_test_context(MockGatewayClient::with_ports(&["M1"]));
        let svc = CommandService::new(ctx);
        let result = svc.send(CommandKind::Ussd, &ids(&["M1"]), "100").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert_eq!(mock.call_count(), 0);
    }
}
