//! 端口列表页面视图

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use super::{checkbox, render_placeholder};
use crate::i18n::{port_status_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染端口列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let ports = &app.ports;

    if ports.ports.is_empty() {
        if let Some(error) = &ports.error {
            render_placeholder(frame, area, error, true);
        } else if ports.loading {
            render_placeholder(frame, area, texts.common.loading, false);
        } else {
            render_placeholder(frame, area, texts.ports.no_ports, false);
        }
        return;
    }

    let c = colors();
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(texts.ports.col_id),
        Cell::from(texts.ports.col_name),
        Cell::from(texts.ports.col_terminal),
        Cell::from(texts.ports.col_model),
        Cell::from(texts.ports.col_imei),
        Cell::from(texts.ports.col_status),
    ])
    .style(Styles::title());

    // 进行中的操作涉及的行标为忙碌
    let busy_ids = ports.action_bar.pending().map(|p| p.ids.as_slice()).unwrap_or(&[]);

    let rows: Vec<Row> = ports
        .ports
        .iter()
        .map(|port| {
            let marker = if busy_ids.contains(&port.id) {
                "[~]"
            } else {
                checkbox(ports.selection.is_selected(&port.id))
            };
            Row::new(vec![
                Cell::from(marker),
                Cell::from(port.id.clone()),
                Cell::from(port.name.clone()),
                Cell::from(port.terminal.clone()),
                Cell::from(port.model.clone()),
                Cell::from(port.imei.clone()),
                Cell::from(port_status_label(port.status))
                    .style(Style::default().fg(c.port_status(port.status))),
            ])
            .style(Style::default().fg(c.fg))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Min(10),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(ports.cursor.index()));
    frame.render_stateful_widget(table, area, &mut state);
}
