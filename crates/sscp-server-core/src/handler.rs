//! 连接处理模块 / Connection handling module

use crate::device::SmartDevice;
use futures_util::{SinkExt, StreamExt};
use sscp::codec::line_codec;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::debug;

/// 连接处理错误类型
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("read timed out after {0} ms")]
    ReadTimeout(u64),

    #[error("peer closed before sending a command")]
    NoCommand,

    #[error("codec error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),
}

/// 命令交换处理器：每个连接恰好一次请求/响应
/// Command exchange handler: exactly one request/response per connection
pub struct CommandHandler {
    /// 被驱动的设备 / The device being driven
    device: Arc<dyn SmartDevice>,
    /// 等待客户端命令的上限 / Bound on waiting for the client command
    read_timeout: Duration,
}

impl CommandHandler {
    /// 创建新的交换处理器 / Create new exchange handler
    pub fn new(device: Arc<dyn SmartDevice>, read_timeout: Duration) -> Self {
        Self {
            device,
            read_timeout,
        }
    }

    /// 在一个连接上完成一次命令交换 / Run one command exchange on a connection
    ///
    /// 读恰好一行，派发给设备，写回恰好一行；连接由调用方在返回后关闭。
    /// 对流类型泛型化，便于用内存流做单元测试。
    /// Reads exactly one line, dispatches to the device, writes exactly one
    /// line back; the caller closes the connection after return. Generic over
    /// the stream type so unit tests can drive it with in-memory streams.
    pub async fn run_exchange<S>(&self, stream: S) -> Result<(), ExchangeError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut framed = Framed::new(stream, line_codec());

        let line = match timeout(self.read_timeout, framed.next()).await {
            Err(_) => {
                return Err(ExchangeError::ReadTimeout(
                    self.read_timeout.as_millis() as u64
                ))
            }
            Ok(None) => return Err(ExchangeError::NoCommand),
            Ok(Some(line)) => line?,
        };

        debug!("received command line '{}'", line);
        let reply = self.device.exec_command(&line).await;
        framed.send(reply).await?;

        Ok(())
    }
}
