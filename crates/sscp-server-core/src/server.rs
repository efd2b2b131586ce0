//! SSCP 服务器模块 / SSCP server module

use crate::device::{SmartDevice, SmartSocketDevice};
use crate::handler::CommandHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 服务器错误类型
#[derive(Error, Debug)]
pub enum SscpServerError {
    /// 监听地址绑定失败，启动中止 / Bind failure, startup aborts
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// SSCP 服务器配置
#[derive(Debug, Clone)]
pub struct SscpServerConfig {
    /// 等待客户端命令的超时（毫秒）
    pub read_timeout_ms: u64,
}

impl Default for SscpServerConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: 5000,
        }
    }
}

impl SscpServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.read_timeout_ms = timeout_ms;
        self
    }
}

/// SSCP 服务器构建器
/// SSCP server builder
pub struct SscpServerBuilder {
    /// 被服务的设备 / The device being served
    device: Option<Arc<dyn SmartDevice>>,
    /// 服务器配置
    config: SscpServerConfig,
}

impl Default for SscpServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SscpServerBuilder {
    /// 创建新的服务器构建器
    /// Create new server builder
    pub fn new() -> Self {
        Self {
            device: None,
            config: SscpServerConfig::default(),
        }
    }

    /// 设置被服务的设备
    /// Set the device to serve
    pub fn with_device(mut self, device: Arc<dyn SmartDevice>) -> Self {
        self.device = Some(device);
        self
    }

    /// 设置服务器配置
    /// Set server configuration
    pub fn with_config(mut self, config: SscpServerConfig) -> Self {
        self.config = config;
        self
    }

    /// 绑定监听地址并构建服务器
    /// Bind the listen address and build the server
    pub async fn bind(self, addr: &str) -> Result<SscpServer, SscpServerError> {
        // 使用默认值
        let device = self
            .device
            .unwrap_or_else(|| Arc::new(SmartSocketDevice::new()));

        SscpServer::bind(addr, device, self.config).await
    }
}

/// SSCP 命令服务器
///
/// 每个连接恰好处理一条命令：读一行，派发给设备，写回一行，关闭。
/// 连接之间不保留任何会话状态。
/// Each connection services exactly one command: read one line, dispatch to
/// the device, write one line back, close. No session state survives a
/// connection.
pub struct SscpServer {
    listener: TcpListener,
    handler: Arc<CommandHandler>,
}

impl SscpServer {
    /// 绑定监听地址 / Bind the listen address
    ///
    /// 绑定失败是致命错误，必须在进程继续之前上报。
    pub async fn bind(
        addr: &str,
        device: Arc<dyn SmartDevice>,
        config: SscpServerConfig,
    ) -> Result<Self, SscpServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| SscpServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        info!("SSCP server listening on {}", listener.local_addr()?);

        let handler = Arc::new(CommandHandler::new(
            device,
            Duration::from_millis(config.read_timeout_ms),
        ));

        Ok(Self { listener, handler })
    }

    /// 实际绑定的地址（测试中配合端口 0 使用）
    /// The actually bound address (used with port 0 in tests)
    pub fn local_addr(&self) -> Result<SocketAddr, SscpServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// 接受连接并服务，直到任务被取消
    /// Accept and serve connections until the task is cancelled
    ///
    /// 单个连接上的失败（对端重置、畸形输入、读超时）只丢弃该连接，
    /// 不影响服务器和其他连接。
    pub async fn serve(self) -> Result<(), SscpServerError> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(err) => {
                    warn!("accept failed: {}", err);
                    continue;
                }
            };
            info!("connected client: {}", peer);

            let handler = self.handler.clone();
            tokio::spawn(async move {
                if let Err(err) = handler.run_exchange(stream).await {
                    warn!("client {}: {}", peer, err);
                }
                info!("disconnected client: {}", peer);
            });
        }
    }
}
