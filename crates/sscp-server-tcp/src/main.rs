/*!
* 文件名: main.rs
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: clap, tokio
* 描述: SSCP命令服务器入口 / SSCP command server entry point
*/

use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt;

/// SmartSocket 命令服务器 / SmartSocket command server
#[derive(Parser)]
#[command(name = "sscp-server")]
struct Cli {
    /// 监听地址 / Listen address (host:port)
    #[arg(long, default_value = sscp::SSCP_DEFAULT_ADDR)]
    listen: String,

    /// 日志过滤指令 / Log filter directive
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let _ = fmt().with_env_filter(cli.log.as_str()).try_init();

    info!("Starting SSCP server on {}", cli.listen);

    tokio::select! {
        result = sscp_server_tcp::run_server(&cli.listen) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
