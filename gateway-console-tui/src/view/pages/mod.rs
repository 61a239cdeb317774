//! 页面视图

pub mod commands;
pub mod dashboard;
pub mod gateway_status;
pub mod imei;
pub mod maintenance;
pub mod port_list;
pub mod sim_cards;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::colors;

/// 勾选列
fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// 空列表 / 加载中 / 出错时的占位文本
fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, is_error: bool) {
    let c = colors();
    let color = if is_error { c.error } else { c.muted };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {text}"), Style::default().fg(color)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
