//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 列表选择
    pub const TOGGLE_ROW: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const SELECT_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));

    // 操作栏
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_ENABLE: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const ACTION_DISABLE: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const ACTION_REBOOT: KeyBinding = KeyBinding::alt(KeyCode::Char('b'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_POLICY: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_exact_modifiers() {
        let plain = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        let alt = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT);
        let ctrl_alt = KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::ALT | KeyModifiers::CONTROL,
        );

        assert!(DefaultKeymap::ACTION_DELETE.matches(&alt));
        assert!(!DefaultKeymap::ACTION_DELETE.matches(&plain));
        assert!(!DefaultKeymap::ACTION_DELETE.matches(&ctrl_alt));
    }
}
