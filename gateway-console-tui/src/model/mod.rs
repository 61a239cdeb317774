//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         mod focus;          // 焦点面板
//!         mod menu;           // 侧边栏菜单树
//!         mod page;           // 页面（与菜单路由一一对应）
//!         mod sidebar;        // 侧边栏光标 + 核心库 NavigationState
//!         pub mod state;      // 各页面状态、弹窗
//!
//! 与界面框架无关的部分（路由激活、批量选择、对话框、操作栏）都在
//! gateway-console-core 的 `state` 模块中，这里只把它们组合成页面状态。

mod app;
mod focus;
mod menu;
mod page;
mod sidebar;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use menu::{console_menu, menu_label};
pub use page::Page;
pub use sidebar::{SidebarAction, SidebarState};
pub use state::{Modal, ModalState, TextInput};
