//! 弹窗状态

use gateway_console_core::state::BulkAction;
use gateway_console_core::types::{CommandKind, UploadKind};

/// 单行文本输入（带校验错误提示）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub error: Option<String>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    pub fn pop(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// 去除首尾空白后的值；为空时返回 `None`
    pub fn trimmed(&self) -> Option<&str> {
        let value = self.value.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
    /// 批量操作二次确认（重启、删除）
    ConfirmBulk {
        action: BulkAction,
        count: usize,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 编辑端口（草稿在 `PortsState::editor` 中）
    EditPort { error: Option<String> },
    /// 输入策略名后批量应用
    ApplyPolicy(TextInput),
    /// 输入 IMEI 模板
    ImeiTemplate(TextInput),
    /// 输入 AT / USSD 指令
    CommandInput { kind: CommandKind, input: TextInput },
    /// 按运营商查询余额
    OperatorQuery(TextInput),
    /// 输入待上传文件路径
    UploadPath { kind: UploadKind, input: TextInput },
}

impl Modal {
    /// 当前弹窗的文本输入框
    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Modal::ApplyPolicy(input)
            | Modal::ImeiTemplate(input)
            | Modal::OperatorQuery(input)
            | Modal::CommandInput { input, .. }
            | Modal::UploadPath { input, .. } => Some(input),
            Modal::Help | Modal::Error { .. } | Modal::ConfirmBulk { .. } | Modal::EditPort { .. } => {
                None
            }
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示批量操作确认弹窗
    pub fn show_confirm_bulk(&mut self, action: BulkAction, count: usize) {
        self.active = Some(Modal::ConfirmBulk {
            action,
            count,
            focus: 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_clears_error_on_edit() {
        let mut input = TextInput::new(" ");
        assert_eq!(input.trimmed(), None);
        input.error = Some("required".into());
        input.push('x');
        assert_eq!(input.error, None);
        assert_eq!(input.trimmed(), Some("x"));
    }

    #[test]
    fn only_text_modals_expose_input() {
        let mut modal = Modal::ImeiTemplate(TextInput::default());
        assert!(modal.input_mut().is_some());
        assert!(Modal::Help.input_mut().is_none());
    }
}
