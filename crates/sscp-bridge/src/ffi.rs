/*!
* 文件名: ffi
* 作者: JQQ
* 创建日期: 2025/12/16
* 最后修改日期: 2025/12/16
* 版权: 2023 JQQ. All rights reserved.
* 依赖: lazy_static, tokio
* 描述: SSCP Bridge C ABI入口 / SSCP bridge C ABI entry points
*/

use crate::{config::SscpBridgeConfig, AsyncSscpBridge};
use lazy_static::lazy_static;
use sscp::ERROR_PREFIX;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tokio::runtime::Runtime;
use tracing::error;

lazy_static! {
    /// 进程级共享运行时：跨 FFI 调用复用，避免每次调用重建
    /// Process-wide runtime shared across FFI calls
    static ref FFI_RUNTIME: Option<Runtime> = Runtime::new().ok();
}

/// 向指定地址的 SmartSocket 发送一条命令并返回设备响应。
/// Send one command to the SmartSocket at `address` and return its response.
///
/// # 契约 / Contract
/// - `address`、`command`：NUL 结尾的 UTF-8 字符串，所有权保留在调用方。
/// - 返回值：NUL 结尾的 UTF-8 字符串，永不为 null，永不为空；
///   所有权转移给调用方，必须用 [`send_command_free`] 释放。
/// - 桥接层失败（连接失败、超时、非法输入）编码为以 `ERROR: ` 为前缀的
///   响应文本；设备端响应从不携带该前缀。任何错误都不会以异常或 panic
///   形式跨越 C 边界。
/// - The returned buffer is owned by the caller and must be released with
///   [`send_command_free`]. Bridge-level failures are encoded as responses
///   with the `ERROR: ` prefix; nothing ever unwinds across the boundary.
///
/// # Safety
/// `address` 与 `command` 必须是有效的、NUL 结尾的指针（null 会被拒绝并
/// 返回错误响应，而不是被解引用）。
#[no_mangle]
pub unsafe extern "C" fn send_command(
    address: *const c_char,
    command: *const c_char,
) -> *mut c_char {
    // 输入先拷贝成 Rust 字符串，之后的派发不再接触裸指针
    let address = read_c_str(address, "address");
    let command = read_c_str(command, "command");

    let response = catch_unwind(AssertUnwindSafe(|| dispatch_command(address, command)))
        .unwrap_or_else(|_| format!("{ERROR_PREFIX}internal panic in bridge"));

    into_owned_c_string(response)
}

/// 释放 [`send_command`] 返回的缓冲区。
/// Release a buffer returned by [`send_command`].
///
/// # Safety
/// `ptr` 必须是 [`send_command`] 的返回值，且只能释放一次；
/// null 指针是空操作。
#[no_mangle]
pub unsafe extern "C" fn send_command_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// 桥接库版本号；静态字符串，调用方不得释放。
/// Bridge library version; a static string the caller must not free.
#[no_mangle]
pub extern "C" fn sscp_bridge_version() -> *const c_char {
    b"0.1.0\0".as_ptr() as *const c_char
}

/// 边界内的安全部分：输入已经拷贝成 Rust 字符串
/// The safe half of the boundary: inputs are already owned Rust strings
fn dispatch_command(
    address: std::result::Result<String, String>,
    command: std::result::Result<String, String>,
) -> String {
    let address = match address {
        Ok(text) => text,
        Err(response) => return response,
    };
    let command = match command {
        Ok(text) => text,
        Err(response) => return response,
    };

    let runtime = match FFI_RUNTIME.as_ref() {
        Some(runtime) => runtime,
        None => return format!("{ERROR_PREFIX}failed to start bridge runtime"),
    };

    let bridge = AsyncSscpBridge::new(SscpBridgeConfig::default());
    match runtime.block_on(bridge.send_command(&address, &command)) {
        Ok(reply) => reply,
        Err(err) => {
            error!("bridge call failed: {}", err);
            format!("{ERROR_PREFIX}{err}")
        }
    }
}

/// 读取 NUL 结尾的 UTF-8 输入 / Read a NUL-terminated UTF-8 input
///
/// null 指针和非 UTF-8 输入都转换为错误响应，绝不解引用非法内存。
unsafe fn read_c_str(ptr: *const c_char, name: &str) -> std::result::Result<String, String> {
    if ptr.is_null() {
        return Err(format!("{ERROR_PREFIX}{name} is a null pointer"));
    }

    match CStr::from_ptr(ptr).to_str() {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Err(format!("{ERROR_PREFIX}{name} is not valid UTF-8")),
    }
}

/// 转换为调用方拥有的 C 字符串 / Convert into a caller-owned C string
///
/// 响应契约保证无内部 NUL；入参来自响应路径之外时（panic 消息等）
/// 仍做一次替换兜底。
fn into_owned_c_string(text: String) -> *mut c_char {
    let sanitized = if text.is_empty() {
        format!("{ERROR_PREFIX}empty response")
    } else {
        text.replace('\0', " ")
    };

    match CString::new(sanitized) {
        Ok(c_string) => c_string.into_raw(),
        // 上面的替换已去除所有 NUL，这个分支不可达
        Err(_) => CString::default().into_raw(),
    }
}
