/*!
* 文件名: config
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: SSCP Bridge配置 / SSCP bridge configuration
*/

/// SSCP Bridge配置
#[derive(Debug, Clone)]
pub struct SscpBridgeConfig {
    /// TCP连接超时（毫秒）
    pub connect_timeout_ms: u64,
    /// 等待设备响应超时（毫秒）
    pub reply_timeout_ms: u64,
}

impl Default for SscpBridgeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 3000,
            reply_timeout_ms: 5000,
        }
    }
}

impl SscpBridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = timeout_ms;
        self
    }

    pub fn with_reply_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.reply_timeout_ms = timeout_ms;
        self
    }
}
