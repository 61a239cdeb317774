//! View 层：界面渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 侧边栏 + 内容区 + 状态栏）
//!         mod components;         // 侧边栏、状态栏、操作栏、弹窗
//!         mod pages;              // 各页面内容
//!         pub mod theme;          // 主题与样式
//!
//!
//! 渲染顺序：
//!
//! ```text
//!     ┌──────────────────────── 标题栏 ────────────────────────┐
//!     │ 侧边栏 (20%) │ 页面内容 (80%)                           │
//!     │              │                                         │
//!     │              │        ┌──── 操作栏（有选中项时）────┐   │
//!     ├──────────────┴────────┴────────────────────────────┴───┤
//!     │ 状态栏：快捷键提示 │ 状态消息                             │
//!     └────────────────────────────────────────────────────────┘
//!
//!     弹窗最后绘制，位于最上层。
//! ```

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
