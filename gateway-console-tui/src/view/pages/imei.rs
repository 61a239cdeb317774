//! IMEI 管理页面

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use super::{checkbox, render_placeholder};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let imei = &app.imei;

    if imei.records.is_empty() {
        if let Some(error) = &imei.error {
            render_placeholder(frame, area, error, true);
        } else if imei.loading {
            render_placeholder(frame, area, texts.common.loading, false);
        } else {
            render_placeholder(frame, area, texts.imei.no_records, false);
        }
        return;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(texts.ports.col_terminal),
        Cell::from(texts.imei.col_original),
        Cell::from(texts.imei.col_current),
        Cell::from(format!(
            "{} ({})",
            texts.imei.col_modified,
            imei.modified_count()
        )),
    ])
    .style(Styles::title());

    let rows: Vec<Row> = imei
        .records
        .iter()
        .map(|record| {
            let current_style = if record.is_modified() {
                Style::default().fg(c.warning)
            } else {
                Style::default().fg(c.fg)
            };
            Row::new(vec![
                Cell::from(checkbox(imei.selection.is_selected(&record.terminal))),
                Cell::from(record.terminal.clone()),
                Cell::from(record.original.clone()).style(Style::default().fg(c.muted)),
                Cell::from(record.current.clone()).style(current_style),
                Cell::from(if record.is_modified() { "✓" } else { "" }),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Length(17),
        Constraint::Length(17),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(imei.cursor.index()));
    frame.render_stateful_widget(table, area, &mut state);
}
