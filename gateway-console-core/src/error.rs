//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all gateway-control operations.
///
/// Each variant carries the `gateway` that produced it, plus variant-specific context.
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// - [`Network`](Self::Network): connectivity issues between console and device
/// - [`Timeout`](Self::Timeout): the device did not answer in time
/// - [`DeviceBusy`](Self::DeviceBusy): the modem is still processing another command
///
/// [`ServiceContext`](crate::services::ServiceContext) retries these with exponential backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred (connection refused, reset, etc.).
    Network {
        /// Gateway that produced the error.
        gateway: String,
        /// Error details.
        detail: String,
    },

    /// The device did not answer in time.
    Timeout {
        /// Gateway that produced the error.
        gateway: String,
        /// Error details.
        detail: String,
    },

    /// The modem is busy with another command.
    DeviceBusy {
        /// Gateway that produced the error.
        gateway: String,
        /// Port that reported busy, if known.
        port_id: Option<String>,
    },

    /// The addressed port does not exist on the device.
    PortNotFound {
        /// Gateway that produced the error.
        gateway: String,
        /// ID of the port that was not found.
        port_id: String,
    },

    /// The device refused to parse the command.
    InvalidCommand {
        /// Gateway that produced the error.
        gateway: String,
        /// The rejected command.
        command: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The device understood the request but refused it.
    Rejected {
        /// Gateway that produced the error.
        gateway: String,
        /// Original message from the device, if available.
        raw_message: Option<String>,
    },

    /// The device firmware does not support the operation.
    Unsupported {
        /// Gateway that produced the error.
        gateway: String,
        /// Operation name.
        operation: String,
    },

    /// An unrecognized error from the device.
    Unknown {
        /// Gateway that produced the error.
        gateway: String,
        /// Raw error message.
        raw_message: String,
    },
}

impl GatewayError {
    /// 是否为瞬时错误，可在退避后重试。
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::DeviceBusy { .. }
        )
    }

    /// 是否为预期行为（用户输入、端口不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::PortNotFound { .. }
                | Self::InvalidCommand { .. }
                | Self::Rejected { .. }
                | Self::Unsupported { .. }
                | Self::DeviceBusy { .. }
        )
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { gateway, detail } => {
                write!(f, "[{gateway}] Network error: {detail}")
            }
            Self::Timeout { gateway, detail } => {
                write!(f, "[{gateway}] Device timeout: {detail}")
            }
            Self::DeviceBusy { gateway, port_id } => {
                if let Some(port) = port_id {
                    write!(f, "[{gateway}] Port '{port}' is busy")
                } else {
                    write!(f, "[{gateway}] Device is busy")
                }
            }
            Self::PortNotFound { gateway, port_id } => {
                write!(f, "[{gateway}] Port '{port_id}' not found")
            }
            Self::InvalidCommand {
                gateway,
                command,
                detail,
            } => {
                write!(f, "[{gateway}] Invalid command '{command}': {detail}")
            }
            Self::Rejected {
                gateway,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{gateway}] Request rejected: {msg}")
                } else {
                    write!(f, "[{gateway}] Request rejected")
                }
            }
            Self::Unsupported { gateway, operation } => {
                write!(f, "[{gateway}] Operation not supported: {operation}")
            }
            Self::Unknown {
                gateway,
                raw_message,
            } => {
                write!(f, "[{gateway}] Unknown error: {raw_message}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Gateway layer Result type alias
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Port not found
    #[error("Port not found: {0}")]
    PortNotFound(String),

    /// Nothing is selected for a bulk action
    #[error("No rows selected")]
    EmptySelection,

    /// Another action is still in flight on the same action bar
    #[error("Another action is in progress: {0}")]
    Busy(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The gateway did not answer within the configured timeout
    #[error("Operation '{operation}' timed out after {after_ms} ms")]
    Timeout { operation: String, after_ms: u64 },

    /// Upload payload exceeds the limit for its kind
    #[error("Upload too large: {size} bytes (limit {limit})")]
    UploadTooLarge { size: usize, limit: usize },

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Gateway error (converted from the client)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::PortNotFound(_)
            | Self::EmptySelection
            | Self::Busy(_)
            | Self::ValidationError(_)
            | Self::UploadTooLarge { .. } => true,
            Self::Gateway(e) => e.is_expected(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
