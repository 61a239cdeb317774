//! 网关状态页面：按端口的运行状态

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::render_placeholder;
use crate::i18n::{port_status_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let ports = &app.ports;

    if ports.ports.is_empty() {
        let text = ports.error.as_deref().unwrap_or(texts.ports.no_ports);
        render_placeholder(frame, area, text, ports.error.is_some());
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    // 顶部：各状态的端口数
    let mut summary = Vec::new();
    for (status, count) in ports.status_counts() {
        summary.push(Span::styled(
            format!(" ● {} {count}  ", port_status_label(status)),
            Style::default().fg(c.port_status(status)),
        ));
    }
    let summary_widget = Paragraph::new(Line::from(summary)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(c.border)),
    );
    frame.render_widget(summary_widget, layout[0]);

    let items: Vec<ListItem> = ports
        .ports
        .iter()
        .map(|port| {
            ListItem::new(Line::from(vec![
                Span::styled("  ● ", Style::default().fg(c.port_status(port.status))),
                Span::styled(
                    format!("{:<6}", port.id),
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<10}", port.model), Style::default().fg(c.muted)),
                Span::styled(
                    port_status_label(port.status),
                    Style::default().fg(c.port_status(port.status)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(ports.cursor.index()));
    frame.render_stateful_widget(list, layout[1], &mut state);
}
