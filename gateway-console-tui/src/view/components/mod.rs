//! 通用组件

pub mod action_bar;
pub mod modal;
pub mod sidebar;
pub mod statusbar;
