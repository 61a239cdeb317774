//! 系统维护页面：固件升级 / 备份恢复 / 授权管理

use gateway_console_core::types::UploadProgress;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::UploadState;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(kind) = app.current_page.upload_kind() else {
        return;
    };
    let upload = app.maintenance.get(kind);
    let texts = t();
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 文件信息
            Constraint::Length(3), // 进度条
            Constraint::Min(1),
        ])
        .split(area);

    let last_file = upload
        .last_file
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    let info = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.maintenance.size_limit),
                Style::default().fg(c.muted),
            ),
            Span::styled(format!("{} KiB", kind.max_size() / 1024), Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.maintenance.last_file),
                Style::default().fg(c.muted),
            ),
            Span::styled(last_file, Style::default().fg(c.fg)),
        ]),
    ];
    frame.render_widget(Paragraph::new(info), layout[0]);

    let (label, color) = stage(upload);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        )
        .gauge_style(Style::default().fg(color))
        .percent(upload.percent())
        .label(format!("{label} {}%", upload.percent()));
    frame.render_widget(gauge, layout[1]);

    if let Some(Err(error)) = &upload.outcome {
        let line = Line::styled(format!("  {error}"), Style::default().fg(c.error));
        frame.render_widget(Paragraph::new(line), layout[2]);
    }
}

/// 当前阶段的文字和颜色
fn stage(upload: &UploadState) -> (&'static str, Color) {
    let texts = &t().maintenance;
    let c = colors();
    match (&upload.outcome, upload.progress) {
        (Some(Ok(())), _) => (texts.completed, c.success),
        (Some(Err(_)), _) => (texts.failed, c.error),
        (None, Some(UploadProgress::Verifying | UploadProgress::Completed)) => {
            (texts.verifying, c.warning)
        }
        (None, Some(_)) => (texts.transferring, c.highlight),
        (None, None) => (texts.idle, c.muted),
    }
}
