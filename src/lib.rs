//! # SQL Splitter
//!
//! 一个流式的 SQL 脚本切分器，不依赖完整的 SQL 语法解析。
//! 逐行读取输入，跟踪引号、转义与注释上下文，只在引号和注释之外识别分隔符，
//! 每次产出一条完整语句。适合迁移工具、REPL、批量执行器处理任意大小的脚本。
//!
//! ## 功能特性
//!
//! - **流式处理**: 内存占用只与最长的单条语句有关
//! - **引号与转义**: 支持 `'`、`"`、`` ` `` 三种引号以及引号内的转义字符
//! - **注释**: 支持 `--`、`#` 单行注释与跨行的 `/* */` 块注释
//! - **分隔符指令**: 支持 `delimiter xx` 在运行时重定义分隔符
//!
//! ## 快速开始
//!
//! ### 切分字符串
//!
//! ```rust
//! use sqlsplitter::split_str;
//!
//! let statements = split_str("select 1;select 'a;b';");
//! assert_eq!(statements, vec!["select 1;", "select 'a;b';"]);
//! ```
//!
//! ### 拉取模式
//!
//! ```rust
//! use sqlsplitter::StatementCursor;
//!
//! let mut cursor = StatementCursor::from_sql("delimiter ;;\nselect 1;select 2;;");
//! while cursor.advance() {
//!     let stmt = cursor.take_statement();
//!     println!("{}: {}", stmt.first_line, stmt);
//! }
//! assert!(cursor.error().is_none());
//! ```
//!
//! ### 从文件流式读取
//!
//! ```rust,no_run
//! use sqlsplitter::{Dialect, StatementCursor};
//!
//! let cursor = StatementCursor::open("schema.sql", Dialect::MySQL)?;
//! for result in cursor {
//!     let stmt = result?;
//!     println!("{}", stmt);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod splitter;
pub mod statement;

pub use config::{Dialect, SplitterConfig};
pub use error::SplitError;
pub use splitter::{
    SplitOutcome,
    StatementCursor,
    for_each_statement,
    iter_statements_from_file,
    split_file,
    split_files_parallel,
    split_str,
};
pub use statement::{Statement, StatementKind};
