/**
* 文件名: smart_socket_client
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: 基本的SSCP Bridge使用示例 / Basic SSCP bridge usage example
*/

// 先启动服务器：cargo run -p sscp-server-tcp
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = sscp::SSCP_DEFAULT_ADDR;

    // 创建Bridge配置
    let config = sscp_bridge::SscpBridgeConfig::new()
        .with_connect_timeout_ms(3000)
        .with_reply_timeout_ms(5000);

    // 创建Bridge实例
    let bridge = sscp_bridge::AsyncSscpBridge::new(config);

    for command in ["info", "on", "info", "off", "info", "qqq"] {
        let response = bridge.send_command(addr, command).await?;
        println!("CLIENT: command '{command}' -> '{response}'");
    }

    Ok(())
}
