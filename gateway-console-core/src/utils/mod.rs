//! 工具函数模块

pub mod imei;
pub mod retry;
