//! SSCP 服务器核心库 / SSCP server core library
//!
//! 提供基于 Tokio 的 SmartSocket 命令服务器实现
//! Provides the SmartSocket command server implementation based on Tokio

pub mod device;
pub mod handler;
pub mod server;

// 重新导出主要类型
pub use device::{SmartDevice, SmartSocketDevice};
pub use handler::{CommandHandler, ExchangeError};
pub use server::{SscpServer, SscpServerBuilder, SscpServerConfig, SscpServerError};

/// SSCP 服务器预lude
/// SSCP server prelude
pub mod prelude {
    pub use crate::device::*;
    pub use crate::handler::*;
    pub use crate::server::*;
}
