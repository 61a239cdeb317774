//! 仪表盘视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{port_status_label, t};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染仪表盘
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 网关信息
            Constraint::Min(1),    // 统计
        ])
        .split(area);

    let last_refresh = app.ports.last_refresh.map_or_else(
        || texts.dashboard.never.to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    let header = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.dashboard.gateway),
                Style::default().fg(c.muted),
            ),
            Span::styled(
                app.gateway_name.clone(),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.dashboard.last_refresh),
                Style::default().fg(c.muted),
            ),
            Span::styled(last_refresh, Style::default().fg(c.fg)),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    let total = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.ports.ports.len()),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.dashboard.total_ports),
            Style::default().fg(c.muted),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border)),
    );
    frame.render_widget(total, stats[0]);

    let mut lines = vec![Line::from("")];
    for (status, count) in app.ports.status_counts() {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(c.port_status(status))),
            Span::styled(
                format!("{:<12}", port_status_label(status)),
                Style::default().fg(c.fg),
            ),
            Span::styled(count.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", texts.dashboard.port_summary))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border)),
    );
    frame.render_widget(summary, stats[1]);
}
