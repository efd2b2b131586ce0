/*!
* 文件名: lib
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: SSCP Bridge库 / SSCP bridge library
*/

pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;
pub mod sync_bridge;
pub mod transport;

// 重新导出主要类型
pub use bridge::AsyncSscpBridge;
pub use config::SscpBridgeConfig;
pub use error::{Result, SscpBridgeError};
pub use sync_bridge::SyncSscpBridge;
