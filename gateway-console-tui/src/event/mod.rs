//! Event 层：事件处理
//!
//! 负责将键盘输入翻译为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! ```text
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!             Event::Key(KeyEvent)        键盘事件，只处理 Press
//!             Event::Resize(..)           下一轮循环自动重绘
//!             其他                         忽略
//!
//!             键盘事件的判断顺序：
//!                 - 有弹窗打开时，交给 handle_modal_keys
//!                 - 全局快捷键（退出、帮助、刷新、语言、主题、Esc、Tab）
//!                 - 焦点位于侧边栏，交给 handle_navigation_keys
//!                 - 焦点位于内容面板，交给 handle_content_keys
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 操作栏快捷键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     端口列表上选中若干行后，操作栏浮出：
//!         Alt+o   启用          Alt+f   禁用
//!         Alt+b   重启 (确认)    Alt+d   删除 (确认)
//!         Alt+p   应用策略       Esc     关闭操作栏（清空选择）
//!
//!     重启、删除会先弹出确认框；确认框中 Tab / ← / → 切换按钮，y 直接确认。
//! ```

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
