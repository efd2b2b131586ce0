/*!
* 文件名: transport
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio, tokio-util
* 描述: SSCP Bridge传输层实现 / SSCP bridge transport layer implementation
*/

use crate::error::{Result, SscpBridgeError};
use futures_util::{SinkExt, StreamExt};
use sscp::codec::line_codec;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::{Framed, LinesCodec};
use tracing::debug;

/// TCP行传输层 / TCP line transport
///
/// 持有一条到设备的连接，按协议帧规则收发单行文本。
pub struct TcpLineTransport {
    framed: Framed<TcpStream, LinesCodec>,
}

impl TcpLineTransport {
    /// 建立到设备的连接 / Establish the device connection
    ///
    /// 连接建立受 `connect_timeout` 约束，超时或失败都返回错误而不是挂起。
    pub async fn connect(addr: &str, connect_timeout: Duration) -> Result<Self> {
        debug!("connecting to {}", addr);

        let stream = timeout(connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| SscpBridgeError::Timeout(connect_timeout.as_millis() as u64))?
            .map_err(|err| {
                SscpBridgeError::connection(format!("failed to connect to {addr}: {err}"))
            })?;

        Ok(Self {
            framed: Framed::new(stream, line_codec()),
        })
    }

    /// 发送一行命令 / Send one command line
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.framed.send(line).await?;
        Ok(())
    }

    /// 读取一行响应 / Receive one response line
    ///
    /// 对端在发送任何行之前关闭连接视为错误。
    pub async fn recv_line(&mut self, reply_timeout: Duration) -> Result<String> {
        match timeout(reply_timeout, self.framed.next()).await {
            Err(_) => Err(SscpBridgeError::Timeout(reply_timeout.as_millis() as u64)),
            Ok(None) => Err(SscpBridgeError::ConnectionClosed),
            Ok(Some(line)) => Ok(line?),
        }
    }
}
