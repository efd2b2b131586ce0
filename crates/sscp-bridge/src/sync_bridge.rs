/*!
* 文件名: sync_bridge
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio
* 描述: SSCP同步Bridge实现 / SSCP synchronous bridge implementation
*/

use crate::{
    bridge::AsyncSscpBridge,
    config::SscpBridgeConfig,
    error::{Result, SscpBridgeError},
};
use tokio::runtime::Runtime;

/// 同步SSCP Bridge
///
/// 持有自己的运行时，调用线程阻塞直到整个往返完成或失败，
/// 对应外部宿主期望的单次阻塞调用风格。
pub struct SyncSscpBridge {
    runtime: Runtime,
    inner: AsyncSscpBridge,
}

impl SyncSscpBridge {
    /// 创建新的同步Bridge实例
    pub fn new(config: SscpBridgeConfig) -> Result<Self> {
        let runtime = Runtime::new()
            .map_err(|err| SscpBridgeError::internal(format!("failed to create runtime: {err}")))?;

        Ok(Self {
            runtime,
            inner: AsyncSscpBridge::new(config),
        })
    }

    /// 发送命令并阻塞等待设备响应
    pub fn send_command(&self, addr: &str, command: &str) -> Result<String> {
        self.runtime.block_on(self.inner.send_command(addr, command))
    }
}
