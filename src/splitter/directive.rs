//! 分隔符指令识别
//!
//! 只有在没有正在累积的语句时才会识别 `delimiter xx` 指令，
//! 语句中间出现的同名关键字按普通内容处理。

use crate::splitter::constants::DELIMITER_DIRECTIVE;

/// 如果整行是一条分隔符指令，返回新的分隔符
pub fn parse_delimiter_directive(line: &[u8]) -> Option<&[u8]> {
    DELIMITER_DIRECTIVE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}
