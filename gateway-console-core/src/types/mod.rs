//! 类型定义模块

mod batch;
mod command;
mod imei;
mod port;
mod sim;
mod upload;

pub use batch::{BatchFailure, BatchOperationResult};
pub use command::{CommandKind, ResponseStatus, TerminalResponse};
pub use imei::{ImeiRecord, ImeiTemplate};
pub use port::{Port, PortStatus};
pub use sim::{BalanceQuery, SimBalance};
pub use upload::{UploadKind, UploadProgress};
