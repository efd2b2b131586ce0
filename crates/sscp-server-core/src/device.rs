//! 设备状态机模块 / Device state machine module

use async_trait::async_trait;
use sscp::{info_response, unknown_command_response, Command, PowerState, RESP_NOW_OFF, RESP_NOW_ON};
use tokio::sync::Mutex;
use tracing::debug;

/// 可被命令服务器驱动的设备抽象 trait
/// Device abstraction trait driven by the command server
#[async_trait]
pub trait SmartDevice: Send + Sync + 'static {
    /// 执行一条文本命令并返回响应行
    /// Execute one text command and return the response line
    ///
    /// # Arguments
    /// * `command` - 原始命令 token / Raw command token
    ///
    /// # Returns
    /// 单行响应；未识别的命令不是错误，必须返回协议定义的
    /// "unknown command" 响应。
    /// A single response line; unrecognized commands are not an error and
    /// must produce the protocol's "unknown command" response.
    async fn exec_command(&self, command: &str) -> String;
}

/// SmartSocket 设备：单个开/关电源状态
/// SmartSocket device: a single on/off power state
#[derive(Debug, Default)]
pub struct SmartSocketDevice {
    /// 电源状态；所有读写都经过该锁串行化，状态迁移对外原子可见
    state: Mutex<PowerState>,
}

impl SmartSocketDevice {
    /// 创建新的设备，初始状态为关 / Create a new device, initially off
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前电源状态 / Current power state
    pub async fn power_state(&self) -> PowerState {
        *self.state.lock().await
    }
}

#[async_trait]
impl SmartDevice for SmartSocketDevice {
    async fn exec_command(&self, command: &str) -> String {
        let reply = match Command::parse(command) {
            Some(Command::On) => {
                // 幂等：重复 on 保持 On
                *self.state.lock().await = PowerState::On;
                RESP_NOW_ON.to_string()
            }
            Some(Command::Off) => {
                *self.state.lock().await = PowerState::Off;
                RESP_NOW_OFF.to_string()
            }
            Some(Command::Info) => info_response(*self.state.lock().await),
            None => unknown_command_response(command),
        };

        debug!("command '{}' -> '{}'", command, reply);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_device_starts_off() {
        let device = SmartSocketDevice::new();
        assert_eq!(device.power_state().await, PowerState::Off);
        assert_eq!(device.exec_command("info").await, "device is OFF");
    }

    #[tokio::test]
    async fn test_on_off_transitions() {
        let device = SmartSocketDevice::new();

        assert_eq!(device.exec_command("on").await, RESP_NOW_ON);
        assert_eq!(device.power_state().await, PowerState::On);

        assert_eq!(device.exec_command("off").await, RESP_NOW_OFF);
        assert_eq!(device.power_state().await, PowerState::Off);
    }

    #[tokio::test]
    async fn test_on_off_are_idempotent() {
        let device = SmartSocketDevice::new();

        device.exec_command("on").await;
        assert_eq!(device.exec_command("on").await, RESP_NOW_ON);
        assert_eq!(device.power_state().await, PowerState::On);

        device.exec_command("off").await;
        assert_eq!(device.exec_command("off").await, RESP_NOW_OFF);
        assert_eq!(device.power_state().await, PowerState::Off);
    }

    #[tokio::test]
    async fn test_info_does_not_mutate() {
        let device = SmartSocketDevice::new();

        device.exec_command("on").await;
        device.exec_command("info").await;
        device.exec_command("info").await;
        assert_eq!(device.power_state().await, PowerState::On);
    }

    #[tokio::test]
    async fn test_unknown_command_leaves_state_untouched() {
        let device = SmartSocketDevice::new();

        device.exec_command("on").await;
        assert_eq!(device.exec_command("qqq").await, "unknown command 'qqq'");
        assert_eq!(device.exec_command("ON").await, "unknown command 'ON'");
        assert_eq!(device.exec_command("").await, "unknown command ''");
        assert_eq!(device.power_state().await, PowerState::On);
    }

    #[tokio::test]
    async fn test_concurrent_mutations_are_serialized() {
        use std::sync::Arc;

        let device = Arc::new(SmartSocketDevice::new());

        let mut tasks = Vec::new();
        for i in 0..100 {
            let device = device.clone();
            let command = if i % 2 == 0 { "on" } else { "off" };
            tasks.push(tokio::spawn(async move {
                device.exec_command(command).await
            }));
        }
        for task in tasks {
            task.await.expect("device task panicked");
        }

        // 并发之后状态必须是两个合法值之一，且后续串行命令立即可见
        let state = device.power_state().await;
        assert!(state == PowerState::On || state == PowerState::Off);

        device.exec_command("on").await;
        assert_eq!(device.exec_command("info").await, "device is ON");
    }
}
