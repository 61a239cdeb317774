//! 浮动批量操作栏
//!
//! 端口列表有选中项时浮在内容区底部；操作进行中显示进行中的操作名。

use gateway_console_core::state::ActionBar;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{bulk_action_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

const BAR_HEIGHT: u16 = 3;

/// 渲染操作栏（没有选中项时不显示）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let ports = &app.ports;
    if !ActionBar::is_visible(&ports.selection) || area.height < BAR_HEIGHT + 2 {
        return;
    }

    let c = colors();
    let texts = t();
    let bar = Rect::new(
        area.x + 1,
        area.y + area.height - BAR_HEIGHT,
        area.width.saturating_sub(2),
        BAR_HEIGHT,
    );

    let mut spans = vec![Span::styled(
        format!(" {} {} ", ports.selection.count(), texts.common.selected),
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    )];

    if let Some(pending) = ports.action_bar.pending() {
        spans.push(Span::styled(
            format!(
                "│ {}: {} ({})",
                texts.common.busy,
                bulk_action_label(&pending.action),
                pending.ids.len()
            ),
            Style::default().fg(c.warning),
        ));
    } else {
        let h = &texts.hints;
        for (key, desc) in [
            ("Alt+o", h.enable),
            ("Alt+f", h.disable),
            ("Alt+b", h.reboot),
            ("Alt+d", h.delete),
            ("Alt+p", h.policy),
            ("Esc", h.clear),
        ] {
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(key, Styles::hint_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(desc, Styles::hint_desc()));
            spans.push(Span::raw(" "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));

    frame.render_widget(Clear, bar);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), bar);
}
