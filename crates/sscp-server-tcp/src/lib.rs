//! SSCP 可运行服务器 / SSCP runnable server
//!
//! 在给定地址上启动 SmartSocket 命令服务器
//! Starts the SmartSocket command server on the given address

use sscp_server_core::prelude::*;

/// 构建并运行服务器，直到任务被取消
/// Build and run the server until the task is cancelled
///
/// 绑定失败立即返回错误；之后单连接层面的失败只记录日志。
pub async fn run_server(addr: &str) -> Result<(), SscpServerError> {
    let server = SscpServerBuilder::new().bind(addr).await?;
    server.serve().await
}
