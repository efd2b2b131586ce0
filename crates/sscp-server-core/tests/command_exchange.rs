//! 命令交换集成测试 / Command exchange integration tests

use sscp_server_core::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// 启动测试服务器并返回绑定地址
async fn start_server(device: Arc<SmartSocketDevice>) -> SocketAddr {
    let server = SscpServerBuilder::new()
        .with_device(device)
        .with_config(SscpServerConfig::new().with_read_timeout_ms(1000))
        .bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = server.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = server.serve().await;
    });

    addr
}

/// 裸 TCP 客户端：发一行命令，读整条响应直到服务器关闭连接
async fn send_raw(addr: SocketAddr, command: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream
        .write_all(format!("{command}\n").as_bytes())
        .await
        .expect("write command");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}

#[tokio::test]
async fn test_example_traffic_scenario() {
    let device = Arc::new(SmartSocketDevice::new());
    let addr = start_server(device).await;

    assert_eq!(send_raw(addr, "info").await, "device is OFF\n");
    assert_eq!(send_raw(addr, "on").await, "device is now ON\n");
    assert_eq!(send_raw(addr, "info").await, "device is ON\n");
    assert_eq!(send_raw(addr, "off").await, "device is now OFF\n");
    assert_eq!(send_raw(addr, "info").await, "device is OFF\n");
    assert_eq!(send_raw(addr, "qqq").await, "unknown command 'qqq'\n");
}

#[tokio::test]
async fn test_one_exchange_per_connection() {
    let device = Arc::new(SmartSocketDevice::new());
    let addr = start_server(device.clone()).await;

    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(b"on\ninfo\n").await.expect("write");

    // 服务器只回答第一条命令，然后关闭连接
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    assert_eq!(response, "device is now ON\n");

    // 第一条命令仍然生效
    assert_eq!(device.power_state().await, sscp::PowerState::On);
}

#[tokio::test]
async fn test_silent_client_does_not_disturb_server() {
    let device = Arc::new(SmartSocketDevice::new());
    let addr = start_server(device).await;

    // 连上就断，不发送任何命令
    drop(TcpStream::connect(addr).await.expect("connect"));

    // 之后的正常交换不受影响
    assert_eq!(send_raw(addr, "on").await, "device is now ON\n");
    assert_eq!(send_raw(addr, "info").await, "device is ON\n");
}

#[tokio::test]
async fn test_garbage_line_does_not_disturb_server() {
    let device = Arc::new(SmartSocketDevice::new());
    let addr = start_server(device).await;

    // 超过协议上限的行：连接被丢弃
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let oversize = vec![b'x'; sscp::codec::MAX_LINE_LENGTH + 16];
    let _ = stream.write_all(&oversize).await;
    let _ = stream.write_all(b"\n").await;
    drop(stream);

    assert_eq!(send_raw(addr, "info").await, "device is OFF\n");
}

#[tokio::test]
async fn test_concurrent_clients_observe_serialized_state() {
    let device = Arc::new(SmartSocketDevice::new());
    let addr = start_server(device.clone()).await;

    let mut tasks = Vec::new();
    for i in 0..32 {
        let command = if i % 2 == 0 { "on" } else { "off" };
        tasks.push(tokio::spawn(async move { send_raw(addr, command).await }));
    }
    for task in tasks {
        let response = task.await.expect("client task panicked");
        assert!(response == "device is now ON\n" || response == "device is now OFF\n");
    }

    // 并发风暴之后设备仍处于合法状态，且最后一次串行写入立即可见
    assert_eq!(send_raw(addr, "off").await, "device is now OFF\n");
    assert_eq!(send_raw(addr, "info").await, "device is OFF\n");
    assert_eq!(device.power_state().await, sscp::PowerState::Off);
}
