//! USSD / AT 指令页面
//!
//! 左侧为终端列表（勾选 + 最近一次响应状态），右侧为响应详情。

use gateway_console_core::types::ResponseStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{checkbox, render_placeholder};
use crate::i18n::t;
use crate::model::state::CommandState;
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(kind) = app.current_page.command_kind() else {
        return;
    };
    let state = app.commands(kind);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_terminals(state, frame, columns[0]);
    render_responses(state, frame, columns[1]);
}

fn status_label(status: ResponseStatus) -> &'static str {
    let texts = &t().commands;
    match status {
        ResponseStatus::Pending => texts.pending,
        ResponseStatus::Success => texts.success,
        ResponseStatus::Failed => texts.failed,
    }
}

fn render_terminals(state: &CommandState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.commands.terminals))
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(c.border));

    if state.selection.all_ids().is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_placeholder(frame, inner, texts.ports.no_ports, false);
        return;
    }

    let items: Vec<ListItem> = state
        .selection
        .all_ids()
        .iter()
        .map(|terminal| {
            let mut spans = vec![
                Span::raw(checkbox(state.selection.is_selected(terminal))),
                Span::raw(" "),
                Span::styled(format!("{terminal:<8}"), Style::default().fg(c.fg)),
            ];
            if let Some(response) = state.response_for(terminal) {
                spans.push(Span::styled(
                    status_label(response.status),
                    Style::default().fg(c.response_status(response.status)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());
    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor.index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_responses(state: &CommandState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}: ", texts.commands.last_command),
            Style::default().fg(c.muted),
        ),
        Span::styled(
            state.last_command.clone().unwrap_or_default(),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ])];

    if state.responses.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(" {}", texts.commands.no_responses),
            Style::default().fg(c.muted),
        ));
    } else {
        let (ok, failed) = state.summary();
        lines.push(Line::styled(
            format!(
                " {} {ok} / {} {failed}",
                texts.commands.success, texts.commands.failed
            ),
            Style::default().fg(c.muted),
        ));
        lines.push(Line::from(""));

        // 时间 + 终端 + 状态之后剩余的宽度留给响应内容
        let content_width = usize::from(area.width).saturating_sub(32);
        for response in &state.responses {
            let time = response
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S");
            lines.push(Line::from(vec![
                Span::styled(format!(" {time} "), Style::default().fg(c.muted)),
                Span::styled(format!("{:<8} ", response.terminal), Style::default().fg(c.fg)),
                Span::styled(
                    format!("{:<7} ", status_label(response.status)),
                    Style::default().fg(c.response_status(response.status)),
                ),
                Span::styled(
                    truncate_to_width(&response.content.replace(['\r', '\n'], " "), content_width),
                    Style::default().fg(c.fg),
                ),
            ]));
        }
    }

    let block = Block::default().title(format!(" {} ", texts.commands.responses));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
