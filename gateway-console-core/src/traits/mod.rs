//! 网关设备抽象 trait 定义

mod gateway_client;

pub use gateway_client::GatewayControlClient;
