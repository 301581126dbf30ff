//! StatementCursor - 从 Reader 流式读取并切分语句
//!
//! 提供 `advance` / `take_statement` 拉取协议，同时实现了 `Iterator`。
//! 内存占用只与最长的单条语句有关，与脚本总大小无关。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, trace};

use crate::config::{Dialect, SplitterConfig};
use crate::error::SplitError;
use crate::splitter::assembler::{Feed, SplitState, SplitStrategy};
use crate::splitter::line_source::LineSource;
use crate::statement::Statement;

/// 语句游标
///
/// # 类型参数
///
/// * `R` - 实现了 `BufRead` trait 的数据源
pub struct StatementCursor<R: BufRead> {
    source: LineSource<R>,
    strategy: Box<dyn SplitStrategy>,
    state: SplitState,
    dialect: Dialect,
    /// 已就绪、等待 `take_statement` 的语句
    current: Option<Statement>,
    /// 数据源已耗尽（EOF 或 I/O 错误）
    exhausted: bool,
    error: Option<SplitError>,
    error_reported: bool,
}

impl StatementCursor<BufReader<File>> {
    /// 打开 SQL 脚本文件
    ///
    /// # 参数
    ///
    /// * `path` - 脚本文件路径
    /// * `dialect` - 方言
    ///
    /// # 返回
    ///
    /// * `Ok(StatementCursor)` - 游标
    /// * `Err(SplitError::FileNotFound)` - 文件无法打开
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use sqlsplitter::{Dialect, StatementCursor};
    ///
    /// let mut cursor = StatementCursor::open("migration.sql", Dialect::MySQL)?;
    /// while cursor.advance() {
    ///     println!("{}", cursor.take_statement());
    /// }
    /// if let Some(err) = cursor.error() {
    ///     eprintln!("{}", err);
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Self, SplitError> {
        Self::open_with_config(path, SplitterConfig::for_dialect(dialect))
    }

    /// 使用完整配置打开 SQL 脚本文件
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: SplitterConfig,
    ) -> Result<Self, SplitError> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| SplitError::FileNotFound {
            path: format!("{}: {}", path_ref.display(), e),
        })?;
        Ok(Self::with_config(file, config))
    }
}

impl<'a> StatementCursor<BufReader<&'a [u8]>> {
    /// 切分内存中的 SQL 文本
    pub fn from_sql(sql: &'a str) -> Self {
        Self::with_config(sql.as_bytes(), SplitterConfig::default())
    }
}

impl<R: Read> StatementCursor<BufReader<R>> {
    pub fn new(reader: R, dialect: Dialect) -> Self {
        Self::with_config(reader, SplitterConfig::for_dialect(dialect))
    }

    pub fn with_config(reader: R, config: SplitterConfig) -> Self {
        let reader = BufReader::with_capacity(config.buffer_capacity, reader);
        Self::from_buf_read(reader, config)
    }
}

impl<R: BufRead> StatementCursor<R> {
    /// 直接使用已经带缓冲的数据源
    pub fn from_buf_read(reader: R, config: SplitterConfig) -> Self {
        Self {
            source: LineSource::new(reader),
            strategy: config.dialect.strategy(config.escape),
            state: SplitState::new(config.delimiter),
            dialect: config.dialect,
            current: None,
            exhausted: false,
            error: None,
            error_reported: false,
        }
    }

    /// 推进到下一条完整语句
    ///
    /// 返回 `true` 时可以通过 [`take_statement`](Self::take_statement) 取出语句；
    /// 返回 `false` 表示输入已经结束，之后的调用会一直返回 `false`。
    pub fn advance(&mut self) -> bool {
        if self.current.is_some() {
            return true;
        }

        loop {
            if self.state.pending.is_none() {
                if self.exhausted {
                    // 末尾没有分隔符的语句也要交给调用方
                    return match self.state.finish_remainder() {
                        Some(stmt) => self.ready(stmt),
                        None => false,
                    };
                }
                self.pull_line();
                continue;
            }

            if let Some(stmt) = self.strategy.directive(&mut self.state) {
                debug!(
                    "line {}: delimiter changed to {:?}",
                    stmt.last_line,
                    String::from_utf8_lossy(self.state.delimiter())
                );
                return self.ready(stmt);
            }

            match self.strategy.feed(&mut self.state) {
                Feed::Complete(stmt) => return self.ready(stmt),
                Feed::Incomplete => continue,
            }
        }
    }

    /// 取出当前语句并清空
    ///
    /// 应在 `advance` 返回 `true` 之后调用；否则返回空语句。
    pub fn take_statement(&mut self) -> Statement {
        self.current.take().unwrap_or_default()
    }

    /// 最后一次 I/O 错误；正常结束时为 `None`
    pub fn error(&self) -> Option<&SplitError> {
        self.error.as_ref()
    }

    /// 已读取的行数
    pub fn line_number(&self) -> u64 {
        self.source.lines_read()
    }

    /// 当前生效的分隔符
    pub fn delimiter(&self) -> &[u8] {
        self.state.delimiter()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// 一次性读取所有语句
    ///
    /// 所有语句都会加载到内存中，只适合小脚本或测试。
    pub fn statements(mut self) -> (Vec<Statement>, Option<SplitError>) {
        let mut statements = Vec::new();
        while self.advance() {
            statements.push(self.take_statement());
        }
        (statements, self.error)
    }

    fn pull_line(&mut self) {
        match self.source.next_line() {
            Ok(Some(line)) => {
                let line_number = self.source.lines_read();
                self.state.load_line(line, line_number);
            }
            Ok(None) => self.exhausted = true,
            Err(e) => {
                self.error = Some(e);
                self.exhausted = true;
            }
        }
    }

    fn ready(&mut self, stmt: Statement) -> bool {
        trace!(
            "statement at lines {}-{} ({} bytes)",
            stmt.first_line,
            stmt.last_line,
            stmt.len()
        );
        self.current = Some(stmt);
        true
    }
}

impl<R: BufRead> Iterator for StatementCursor<R> {
    type Item = Result<Statement, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            return Some(Ok(self.take_statement()));
        }
        if self.error_reported {
            return None;
        }
        self.error_reported = true;
        self.error.clone().map(Err)
    }
}

impl<R: BufRead> std::fmt::Debug for StatementCursor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementCursor")
            .field("dialect", &self.dialect)
            .field("state", &self.state)
            .field("exhausted", &self.exhausted)
            .field("error", &self.error)
            .finish()
    }
}
