//! 行帧编解码 / Line framing codec
//!
//! 帧约定：请求与响应均为一行 UTF-8 文本，以 `\n` 结尾。
//! 桥接端与服务端都必须通过 [`line_codec`] 构造编解码器，
//! 保证两侧的帧规则不会漂移。
//! Framing contract: requests and responses are single UTF-8 lines
//! terminated by `\n`. Both bridge and server construct their codec via
//! [`line_codec`] so the framing discipline cannot drift.

use tokio_util::codec::LinesCodec;

/// 单行最大长度（字节）/ Maximum line length in bytes
///
/// 超长输入是传输层错误：该连接被丢弃，服务器不受影响。
pub const MAX_LINE_LENGTH: usize = 1024;

/// 构造共享的行编解码器 / Construct the shared line codec
pub fn line_codec() -> LinesCodec {
    LinesCodec::new_with_max_length(MAX_LINE_LENGTH)
}
