//! SIM 卡页面：勾选终端查询余额

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
    let sim = &app.sim;

    if sim.selection.all_ids().is_empty() {
        render_placeholder(frame, area, texts.ports.no_ports, false);
        return;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(texts.ports.col_terminal),
        Cell::from(texts.sim.col_operator),
        Cell::from(texts.sim.col_phone),
        Cell::from(texts.sim.col_balance),
        Cell::from(texts.sim.col_queried_at),
    ])
    .style(Styles::title());

    let rows: Vec<Row> = sim
        .selection
        .all_ids()
        .iter()
        .map(|terminal| {
            let mark = Cell::from(checkbox(sim.selection.is_selected(terminal)));
            let Some(balance) = sim.balance(terminal) else {
                return Row::new(vec![
                    mark,
                    Cell::from(terminal.clone()),
                    Cell::from(texts.sim.not_queried).style(Style::default().fg(c.muted)),
                ]);
            };
            let balance_color = if balance.balance < 0.0 { c.error } else { c.success };
            Row::new(vec![
                mark,
                Cell::from(terminal.clone()),
                Cell::from(balance.operator.clone()),
                Cell::from(balance.phone_number.clone().unwrap_or_else(|| "-".into())),
                Cell::from(format!("{:.2} {}", balance.balance, balance.currency))
                    .style(Style::default().fg(balance_color)),
                Cell::from(
                    balance
                        .queried_at
                        .with_timezone(&chrono::Local)
                        .format("%H:%M:%S")
                        .to_string(),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(sim.cursor.index()));
    frame.render_stateful_widget(table, area, &mut state);

    if let Some(error) = &sim.error {
        let bottom = Rect::new(area.x, area.bottom().saturating_sub(2), area.width, 2);
        render_placeholder(frame, bottom, error, true);
    }
}
