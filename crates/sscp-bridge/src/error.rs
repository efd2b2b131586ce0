/*!
* 文件名: error
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: thiserror
* 描述: SSCP Bridge错误类型定义 / SSCP bridge error type definitions
*/

use thiserror::Error;

/// SSCP Bridge错误类型
///
/// 错误在桥接层内部以类型传播，只在最外层 FFI 入口转换为
/// 带 `ERROR: ` 前缀的响应字符串。
#[derive(Error, Debug)]
pub enum SscpBridgeError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0} ms")]
    Timeout(u64),

    #[error("codec error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),

    #[error("server closed the connection before replying")]
    ConnectionClosed,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl SscpBridgeError {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SscpBridgeError>;
