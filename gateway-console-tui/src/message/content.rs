//! 内容面板消息类型

use gateway_console_core::state::BulkAction;

/// 内容面板相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 跳到第一行
    SelectFirst,
    /// 跳到最后一行
    SelectLast,

    /// 勾选 / 取消勾选光标所在行
    ToggleRow,
    /// 全选；已全选时全部取消
    SelectAll,
    /// 清空选择（关闭操作栏）
    ClearSelection,

    /// 页面主操作（发送指令、查询余额、改写 IMEI、上传文件）
    Confirm,
    /// 编辑光标所在行
    Edit,

    /// 操作栏上的批量操作
    Bulk(BulkAction),
    /// 批量应用策略（先弹窗输入策略名）
    ApplyPolicy,
}
