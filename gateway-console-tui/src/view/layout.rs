//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 侧边栏
            Constraint::Percentage(80), // 页面内容
        ])
        .split(main_layout[1]);

    components::sidebar::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{} │ {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        app.gateway_name
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Dashboard => pages::dashboard::render(app, frame, inner),
        Page::PortList => {
            pages::port_list::render(app, frame, inner);
            components::action_bar::render(app, frame, inner);
        }
        Page::SimCards => pages::sim_cards::render(app, frame, inner),
        Page::GatewayStatus => pages::gateway_status::render(app, frame, inner),
        Page::Imei => pages::imei::render(app, frame, inner),
        Page::Ussd | Page::AtCommand => pages::commands::render(app, frame, inner),
        Page::Firmware | Page::Backup | Page::License => {
            pages::maintenance::render(app, frame, inner);
        }
    }
}
