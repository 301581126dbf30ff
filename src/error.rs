//! 错误类型定义
//!
//! 定义了切分过程中可能出现的所有错误类型。
//! 注意：输入结束（EOF）不是错误，切分器读完全部语句后正常停止。

use std::io;
use thiserror::Error;

/// 切分错误类型
///
/// 切分器本身从不拒绝输入，只会对字节进行分类；因此这里只有
/// 数据源相关的错误，以及配置解析错误。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// 文件未找到或无法打开
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径（附带底层错误信息）
        path: String,
    },

    /// 读取数据源时发生 I/O 错误
    #[error("I/O error: {0}")]
    IoError(String),

    /// 无法识别的方言名称
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),
}

impl From<io::Error> for SplitError {
    fn from(err: io::Error) -> Self {
        SplitError::IoError(err.to_string())
    }
}
