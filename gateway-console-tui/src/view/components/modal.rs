//! 弹窗组件

use gateway_console_core::types::CommandKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{bulk_action_label, t};
use crate::model::state::{Modal, TextInput};
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::theme::colors;

/// 帮助弹窗中快捷键列的宽度
const HELP_KEY_WIDTH: usize = 16;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::ConfirmBulk { .. } => render_confirm_bulk(frame, modal),
        Modal::EditPort { error } => render_edit_port(app, frame, error.as_deref()),
        Modal::ApplyPolicy(input) => {
            let m = &t().modal;
            render_input(frame, m.policy_title, m.policy_name, None, input);
        }
        Modal::ImeiTemplate(input) => {
            let m = &t().modal;
            render_input(frame, m.imei_title, m.imei_template, Some(m.imei_hint), input);
        }
        Modal::CommandInput { kind, input } => {
            let m = &t().modal;
            let hint = match kind {
                CommandKind::Ussd => m.ussd_hint,
                CommandKind::At => m.at_hint,
            };
            let title = format!("{} ({})", m.command_title, kind.name());
            render_input(frame, &title, m.command_input, Some(hint), input);
        }
        Modal::OperatorQuery(input) => {
            render_input(frame, t().hints.query, t().sim.col_operator, None, input);
        }
        Modal::UploadPath { kind, input } => {
            let texts = t();
            let hint = format!(
                "{}: {} KiB",
                texts.maintenance.size_limit,
                kind.max_size() / 1024
            );
            render_input(
                frame,
                texts.modal.upload_title,
                texts.modal.upload_path,
                Some(hint.as_str()),
                input,
            );
        }
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制边框，返回内容区域
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16, border: Color) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染批量操作确认弹窗
fn render_confirm_bulk(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmBulk {
        action,
        count,
        focus,
    } = modal
    else {
        return;
    };

    let c = colors();
    let texts = t();
    let inner = modal_frame(frame, texts.modal.confirm_title, 46, 9, c.error);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.modal.confirm_bulk, Style::default().fg(c.fg)),
        Line::styled(
            format!("  {} × {count}", bulk_action_label(action)),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.confirm), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染端口编辑弹窗（草稿来自 `PortsState::editor`）
fn render_edit_port(app: &App, frame: &mut Frame, error: Option<&str>) {
    let Some(draft) = app.ports.editor.draft() else {
        return;
    };

    let c = colors();
    let texts = t();
    let inner = modal_frame(frame, texts.modal.edit_port_title, 50, 10, c.highlight);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", texts.ports.col_id), Style::default().fg(c.muted)),
            Span::styled(draft.id.clone(), Style::default().fg(c.fg)),
            Span::raw("  "),
            Span::styled(draft.terminal.clone(), Style::default().fg(c.muted)),
        ]),
        Line::from(""),
        Line::styled(texts.modal.port_name, Style::default().fg(c.muted)),
        Line::styled(
            format!("  {}▎", draft.name),
            Style::default().fg(c.highlight),
        ),
        Line::from(""),
    ];
    if let Some(error) = error {
        lines.push(Line::styled(error.to_string(), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染单输入框弹窗
fn render_input(
    frame: &mut Frame,
    title: &str,
    label: &str,
    hint: Option<&str>,
    input: &TextInput,
) {
    let c = colors();
    let inner = modal_frame(frame, title, 56, 10, c.highlight);

    let mut lines = vec![
        Line::from(""),
        Line::styled(label.to_string(), Style::default().fg(c.muted)),
        Line::styled(
            format!("  {}▎", input.value),
            Style::default().fg(c.highlight),
        ),
        Line::from(""),
    ];
    if let Some(hint) = hint {
        lines.push(Line::styled(hint.to_string(), Style::default().fg(c.muted)));
    }
    if let Some(error) = &input.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let inner = modal_frame(frame, title, 56, 9, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Esc / Enter", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let help = &t().help;
    let sections = [
        (help.global, help.lines_global),
        (help.lists, help.lines_lists),
        (help.ports, help.lines_ports),
    ];

    let rows: usize = sections.iter().map(|(_, lines)| lines.len() + 2).sum();
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let inner = modal_frame(frame, help.title, 56, height, c.highlight);

    let mut lines = Vec::new();
    for (heading, entries) in sections {
        lines.push(Line::styled(
            heading,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", pad_to_width(key, HELP_KEY_WIDTH)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(*desc, Style::default().fg(c.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
