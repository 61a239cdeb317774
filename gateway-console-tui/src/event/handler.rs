//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gateway_console_core::state::BulkAction;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理侧边栏的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        // Enter / →: 展开分组或打开页面
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.current_page == Page::PortList {
        if let Some(msg) = port_action_keys(&key) {
            return AppMessage::Content(msg);
        }
    }

    // 仪表盘和维护页面没有可勾选的行
    let selectable = !matches!(
        app.current_page,
        Page::Dashboard | Page::Firmware | Page::Backup | Page::License
    );
    if selectable {
        if DefaultKeymap::TOGGLE_ROW.matches(&key) {
            return AppMessage::Content(ContentMessage::ToggleRow);
        }
        if DefaultKeymap::SELECT_ALL.matches(&key) {
            return AppMessage::Content(ContentMessage::SelectAll);
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // ←: 回到侧边栏
        KeyCode::Left => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 端口列表专属：编辑与操作栏
fn port_action_keys(key: &KeyEvent) -> Option<ContentMessage> {
    let msg = if DefaultKeymap::ACTION_EDIT.matches(key) {
        ContentMessage::Edit
    } else if DefaultKeymap::ACTION_ENABLE.matches(key) {
        ContentMessage::Bulk(BulkAction::Enable)
    } else if DefaultKeymap::ACTION_DISABLE.matches(key) {
        ContentMessage::Bulk(BulkAction::Disable)
    } else if DefaultKeymap::ACTION_REBOOT.matches(key) {
        ContentMessage::Bulk(BulkAction::Reboot)
    } else if DefaultKeymap::ACTION_DELETE.matches(key) {
        ContentMessage::Bulk(BulkAction::Delete)
    } else if DefaultKeymap::ACTION_POLICY.matches(key) {
        ContentMessage::ApplyPolicy
    } else {
        return None;
    };
    Some(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        // 帮助和错误弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::ConfirmBulk { .. } => handle_confirm_keys(key),
        Modal::EditPort { .. }
        | Modal::ApplyPolicy(_)
        | Modal::ImeiTemplate(_)
        | Modal::CommandInput { .. }
        | Modal::OperatorQuery(_)
        | Modal::UploadPath { .. } => handle_input_keys(key),
    }
}

/// 确认弹窗：Tab / ← / → 切换按钮，Enter 执行焦点按钮，y 直接确认
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::NextField)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char(c) => AppMessage::Modal(ModalMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 单输入框弹窗
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Tab => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::{FocusPanel, TextInput};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn port_list_app() -> App {
        let mut app = App::new(AppConfig::default(), "test");
        app.current_page = Page::PortList;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn bulk_keys_only_apply_on_port_list() {
        let mut app = port_list_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('b'), KeyModifiers::ALT), &app),
            AppMessage::Content(ContentMessage::Bulk(BulkAction::Reboot))
        ));

        app.current_page = Page::Ussd;
        assert!(matches!(
            handle_event(press(KeyCode::Char('b'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn modal_swallows_global_keys() {
        let mut app = port_list_app();
        app.modal.show(Modal::ApplyPolicy(TextInput::new("")));

        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = port_list_app();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
