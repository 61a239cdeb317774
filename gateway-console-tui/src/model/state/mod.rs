//! 各页面状态

mod commands;
mod cursor;
mod imei;
mod maintenance;
mod modal;
mod ports;
mod sim;

pub use commands::{CommandRequest, CommandState};
pub use cursor::ListCursor;
pub use imei::{ImeiRequest, ImeiState};
pub use maintenance::{MaintenanceState, UploadState};
pub use modal::{Modal, ModalState, TextInput};
pub use ports::PortsState;
pub use sim::SimState;
