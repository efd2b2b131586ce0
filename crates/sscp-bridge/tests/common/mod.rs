/*!
* 文件名: mod
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: SSCP Bridge测试共享工具模块 / SSCP bridge test common utilities module
*/

use sscp_server_core::prelude::*;
use std::net::SocketAddr;

/// 启动一个测试服务器并返回其绑定地址
/// Start a test server and return its bound address
#[allow(dead_code)]
pub async fn start_test_server() -> SocketAddr {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let server = SscpServerBuilder::new()
        .bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = server.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = server.serve().await;
    });

    addr
}
