//! SMS Gateway Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务与后台任务 (`backend/`)
//!
//! 状态模型本身（菜单激活、批量选择、编辑弹窗、操作栏）在 `gateway-console-core` 中，
//! 这里只负责把它们接到终端上。

pub mod app;
pub mod backend;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;
