//! 左侧菜单组件

use gateway_console_core::state::MenuEntry;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{menu_label, App};
use crate::view::theme::{colors, Styles};

/// 渲染侧边栏
///
/// 光标行反色显示；激活项（当前路由所在的顶级项和子项）用强调色标出，
/// 二者互不影响。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_navigation();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let nav = app.sidebar.navigation();
    let active = app.sidebar.active();

    let items: Vec<ListItem> = app
        .sidebar
        .entries()
        .iter()
        .map(|entry| {
            let (glyph, is_active) = match entry {
                MenuEntry::Top(item) if item.has_submenu() => {
                    let glyph = if nav.is_expanded(&item.name) { "▾ " } else { "▸ " };
                    (glyph, active.active_top_id.as_deref() == Some(item.name.as_str()))
                }
                MenuEntry::Top(item) => {
                    ("  ", active.active_top_id.as_deref() == Some(item.name.as_str()))
                }
                MenuEntry::Sub { item, .. } => {
                    ("  ", active.active_sub_path.as_deref() == Some(item.path.as_str()))
                }
            };

            let indent = "  ".repeat(entry.depth());
            let label: &str = menu_label(entry.path()).unwrap_or(entry.name());
            let style = if is_active {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(glyph, Style::default().fg(c.muted)),
                Span::styled(label.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    });

    let mut state = ListState::default();
    state.select(Some(app.sidebar.cursor()));

    frame.render_stateful_widget(list, area, &mut state);
}
