//! 与界面框架无关的控制台状态模型

mod action_bar;
mod dialog;
mod navigation;
mod selection;

pub use action_bar::{ActionBar, ActionOutcome, BulkAction, PendingAction};
pub use dialog::DialogState;
pub use navigation::{
    fallback_path, resolve_active, ActiveRoute, MenuEntry, MenuItem, NavigationState,
    SubMenuItem,
};
pub use selection::SelectionState;
