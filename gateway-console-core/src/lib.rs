//! Gateway Console Core Library
//!
//! Provides the platform-independent part of the SMS gateway console, including:
//! - Navigation state (sidebar route resolution, group expansion)
//! - Bulk selection, dialog lifecycle and the floating action bar
//! - Gateway services (ports, AT/USSD commands, SIM balance, IMEI, maintenance uploads)
//!
//! The gateway device itself is abstracted behind the [`GatewayControlClient`] trait,
//! so front ends can plug in a real device client or a simulated one.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, GatewayError, GatewayResult};
pub use services::{CommandPolicy, ServiceContext};
pub use traits::GatewayControlClient;
