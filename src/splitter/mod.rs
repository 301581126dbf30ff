//! Splitter 模块 - 流式切分 SQL 脚本
//!
//! 此模块由四部分组成，按拉取方式串联：
//! - LineSource：按逻辑行读取底层字节流
//! - 分隔符指令识别：处理 `delimiter xx`
//! - 语句组装器：逐字节的引号/注释/转义状态机
//! - StatementCursor：反复驱动以上部分，直到得到完整语句或输入结束

mod api;
mod assembler;
pub(crate) mod constants;
mod cursor;
mod directive;
mod line_source;

pub use api::{
    SplitOutcome, for_each_statement, iter_statements_from_file, split_file, split_files_parallel,
    split_str,
};
pub(crate) use assembler::{MySqlStrategy, SplitStrategy};
pub use cursor::StatementCursor;
pub use directive::parse_delimiter_directive;
pub use line_source::LineSource;
