/*!
* 文件名: bridge
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio
* 描述: SSCP异步Bridge实现 / SSCP asynchronous bridge implementation
*/

use crate::{
    config::SscpBridgeConfig,
    error::{Result, SscpBridgeError},
    transport::TcpLineTransport,
};
use std::time::Duration;
use tracing::debug;

/// 异步SSCP Bridge
///
/// 每次调用都是到设备的一次全新 TCP 往返，不做连接缓存。
/// Every call is a fresh TCP round trip to the device, no connection caching.
#[derive(Debug, Clone, Default)]
pub struct AsyncSscpBridge {
    config: SscpBridgeConfig,
}

impl AsyncSscpBridge {
    /// 创建新的Bridge实例
    pub fn new(config: SscpBridgeConfig) -> Self {
        Self { config }
    }

    /// 发送命令并等待设备响应
    /// Send a command and await the device response
    ///
    /// 返回设备回答的原始响应行；未识别命令的 "unknown command" 响应
    /// 也通过 `Ok` 返回，它在协议层不是失败。
    pub async fn send_command(&self, addr: &str, command: &str) -> Result<String> {
        if command.contains('\n') {
            return Err(SscpBridgeError::invalid_input(
                "command must be a single line",
            ));
        }

        debug!("sending command '{}' to {}", command, addr);

        let mut transport = TcpLineTransport::connect(
            addr,
            Duration::from_millis(self.config.connect_timeout_ms),
        )
        .await?;

        transport.send_line(command).await?;
        let reply = transport
            .recv_line(Duration::from_millis(self.config.reply_timeout_ms))
            .await?;

        debug!("device replied '{}'", reply);
        Ok(reply)
    }
}
