//! SSCP 协议核心类型 / SSCP protocol core types
//!
//! SmartSocket Control Protocol：基于 TCP 的单行文本命令协议
//! SmartSocket Control Protocol: single-line text command protocol over TCP

use std::fmt;

pub mod codec;

/// 默认服务器地址 / Default server address
pub const SSCP_DEFAULT_ADDR: &str = "127.0.0.1:54321";

/// 桥接层错误响应前缀 / Error-response prefix used by the bridge
///
/// 设备端响应永远不会以该前缀开头，调用方据此区分
/// "device said X" 与 "bridge failed for reason Y"。
/// Device responses never start with this prefix, so callers can tell
/// "device said X" from "bridge failed for reason Y".
pub const ERROR_PREFIX: &str = "ERROR: ";

/// `on` 命令确认响应 / Confirmation for the `on` command
pub const RESP_NOW_ON: &str = "device is now ON";

/// `off` 命令确认响应 / Confirmation for the `off` command
pub const RESP_NOW_OFF: &str = "device is now OFF";

/// 命令词汇表（大小写敏感）/ Command vocabulary (case-sensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 查询状态，不改变设备 / Query state, no mutation
    Info,
    /// 打开设备 / Switch the device on
    On,
    /// 关闭设备 / Switch the device off
    Off,
}

impl Command {
    /// 解析命令 token / Parse a command token
    ///
    /// 未识别的 token 返回 `None`：在协议层它不是错误，
    /// 而是 "unknown command" 响应。
    /// Unrecognized tokens return `None`: at the protocol level they are not
    /// an error but the "unknown command" response.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "info" => Some(Command::Info),
            "on" => Some(Command::On),
            "off" => Some(Command::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Info => "info",
            Command::On => "on",
            Command::Off => "off",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 电源状态 / Power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// 初始状态 / Initial state
    #[default]
    Off,
    On,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::Off => write!(f, "OFF"),
            PowerState::On => write!(f, "ON"),
        }
    }
}

/// `info` 命令的响应 / Response to the `info` command
pub fn info_response(state: PowerState) -> String {
    format!("device is {state}")
}

/// 未识别命令的响应，包含原始 token
/// Unrecognized-command response naming the offending token
pub fn unknown_command_response(token: &str) -> String {
    format!("unknown command '{token}'")
}
