//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于快速切分 SQL 脚本。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rayon::prelude::*;

use crate::config::{Dialect, SplitterConfig};
use crate::error::SplitError;
use crate::splitter::cursor::StatementCursor;
use crate::statement::Statement;

/// 文件切分结果：所有语句，以及读取过程中遇到的 I/O 错误
pub type SplitOutcome = (Vec<Statement>, Option<SplitError>);

/// 切分内存中的 SQL 文本
///
/// # 示例
///
/// ```
/// use sqlsplitter::split_str;
///
/// let statements = split_str("select 1;select 'a;b';\nselect\n2");
/// assert_eq!(statements, vec!["select 1;", "select 'a;b';", "select\n2"]);
/// ```
pub fn split_str(sql: &str) -> Vec<String> {
    let (statements, _) = StatementCursor::from_sql(sql).statements();
    statements.into_iter().map(Statement::into_string).collect()
}

/// 从文件读取并返回语句迭代器（流式处理）
///
/// # 参数
///
/// * `path` - 脚本文件路径
///
/// # 返回
///
/// * `Ok(Iterator)` - 迭代项是 `Result<Statement, SplitError>`，读取失败时最后一项为错误
/// * `Err(SplitError)` - 文件打开错误
///
/// # 示例
///
/// ```no_run
/// use sqlsplitter::iter_statements_from_file;
///
/// for result in iter_statements_from_file("schema.sql")? {
///     match result {
///         Ok(stmt) => println!("{}: {}", stmt.first_line, stmt),
///         Err(err) => eprintln!("错误: {}", err),
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn iter_statements_from_file<P>(
    path: P,
) -> Result<impl Iterator<Item = Result<Statement, SplitError>>, SplitError>
where
    P: AsRef<Path>,
{
    StatementCursor::open(path, Dialect::Default)
}

/// 读取并切分整个文件
///
/// 所有语句都会加载到内存中。
pub fn split_file<P>(path: P) -> Result<SplitOutcome, SplitError>
where
    P: AsRef<Path>,
{
    Ok(StatementCursor::open(path, Dialect::Default)?.statements())
}

/// 流式处理每条语句
///
/// # 返回
///
/// * `Ok(count)` - 处理的语句数量
/// * `Err(SplitError)` - 读取失败（失败前已就绪的语句仍会交给回调）
pub fn for_each_statement<R, F>(reader: R, dialect: Dialect, mut f: F) -> Result<usize, SplitError>
where
    R: Read,
    F: FnMut(Statement),
{
    let mut cursor = StatementCursor::new(reader, dialect);
    let mut count = 0;
    while cursor.advance() {
        f(cursor.take_statement());
        count += 1;
    }
    match cursor.error() {
        Some(err) => Err(err.clone()),
        None => Ok(count),
    }
}

/// 并行切分多个脚本文件
///
/// 每个文件使用各自独立的游标，结果顺序与输入顺序一致。
pub fn split_files_parallel<P>(
    paths: &[P],
    dialect: Dialect,
) -> Vec<Result<SplitOutcome, SplitError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| -> Result<SplitOutcome, SplitError> {
            let config = SplitterConfig::for_dialect(dialect);
            let cursor: StatementCursor<BufReader<File>> =
                StatementCursor::open_with_config(path, config)?;
            Ok(cursor.statements())
        })
        .collect()
}
