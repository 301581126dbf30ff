//! 切分器使用的常量定义
//!
//! 定义了引号、注释标记、默认分隔符以及分隔符指令的匹配模式。

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// 默认语句分隔符
pub const DEFAULT_DELIMITER: &[u8] = b";";

/// 默认转义字符（反斜杠）
pub const DEFAULT_ESCAPE: u8 = b'\\';

/// 默认读缓冲区大小
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

// 引号字节

pub const SINGLE_QUOTE: u8 = b'\'';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const BACKTICK: u8 = b'`';

// 注释标记

/// 块注释起始
pub const BLOCK_COMMENT_OPEN: &[u8] = b"/*";

/// 块注释结束
pub const BLOCK_COMMENT_CLOSE: &[u8] = b"*/";

/// 单行注释（SQL 标准）
pub const LINE_COMMENT_DASHES: &[u8] = b"--";

/// 单行注释（MySQL）
pub const LINE_COMMENT_HASH: u8 = b'#';

/// 多行语句各行之间的连接符
pub const LINE_JOINER: u8 = b'\n';

/// 分隔符指令：`delimiter <新分隔符>`，大小写不敏感，允许前导空白。
/// 关键字后至少一个空白，其后的内容（含结尾空白）原样作为新分隔符。
pub static DELIMITER_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^\s*delimiter\s+(\S(?s-u:.)*)$")
        .expect("delimiter directive pattern is valid")
});
