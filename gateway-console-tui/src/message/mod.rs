//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 用户操作翻译成 `AppMessage`，后台任务的结果翻译成 `BackendMessage`，
//! Update 层只根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod navigation;     // 侧边栏子消息
//!         mod content;        // 内容面板子消息（列表、批量操作）
//!         mod modal;          // 弹窗子消息
//!         mod backend;        // 后台任务完成消息
//!
//!
//! 数据流：
//!
//! ```text
//!     按键 ──handle_event──▶ AppMessage ──update──▶ Model
//!                                                    │
//!                                                    ▼ Option<Task>
//!                                               TaskRunner::spawn
//!                                                    │
//!     AppMessage::Backend ◀──── mpsc 通道 ◀── BackendMessage
//! ```

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
