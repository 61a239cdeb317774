//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = vec![("Tab", h.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Dashboard | Page::GatewayStatus => {
                hints.push(("Alt+r", h.refresh));
            }
            Page::PortList => {
                hints.push(("Space", h.toggle_row));
                hints.push(("a", h.select_all));
                hints.push(("Alt+e", h.edit));
                if app.ports.selection.any_selected() {
                    hints.push(("Esc", h.clear));
                }
            }
            Page::SimCards => {
                hints.push(("Space", h.toggle_row));
                hints.push(("Enter", h.query));
            }
            Page::Imei => {
                hints.push(("Space", h.toggle_row));
                hints.push(("Enter", h.rewrite));
            }
            Page::Ussd | Page::AtCommand => {
                hints.push(("Space", h.toggle_row));
                hints.push(("a", h.select_all));
                hints.push(("Enter", h.send));
            }
            Page::Firmware | Page::Backup | Page::License => {
                hints.push(("Enter", h.upload));
            }
        },
    }

    hints.push(("?", h.help));
    hints.push(("q", h.quit));
    hints
}
