//! 侧边栏消息类型

/// 侧边栏相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 跳到第一项
    SelectFirst,
    /// 跳到最后一项
    SelectLast,
    /// 确认：分组展开/折叠，链接则进入页面
    Confirm,
}
