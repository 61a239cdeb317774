//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认 / 提交
    Confirm,

    /// 下一个输入字段（确认弹窗中切换按钮）
    NextField,

    /// 输入字符
    Input(char),

    /// 删除字符
    Backspace,
}
