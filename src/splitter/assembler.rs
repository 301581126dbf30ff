//! 语句组装器 - 逐字节的切分状态机
//!
//! 每次处理一行（或上一行分隔符之后剩余的部分），跨行跟踪引号、转义和块注释的状态，
//! 只有在引号和注释之外才识别当前分隔符。

use std::mem;

use crate::splitter::constants::{
    BACKTICK, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, DOUBLE_QUOTE, LINE_COMMENT_DASHES,
    LINE_COMMENT_HASH, LINE_JOINER, SINGLE_QUOTE,
};
use crate::splitter::directive::parse_delimiter_directive;
use crate::statement::{Statement, StatementKind};

/// 当前打开的引号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Single,
    Double,
    Backtick,
}

impl Quote {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            SINGLE_QUOTE => Some(Quote::Single),
            DOUBLE_QUOTE => Some(Quote::Double),
            BACKTICK => Some(Quote::Backtick),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Quote::Single => SINGLE_QUOTE,
            Quote::Double => DOUBLE_QUOTE,
            Quote::Backtick => BACKTICK,
        }
    }
}

/// 一次 `feed` 的结果
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Feed {
    /// 得到一条完整语句
    Complete(Statement),
    /// 本行已处理完，语句仍在累积中
    Incomplete,
}

/// 切分状态
///
/// 由游标独占持有，每次调用时以 `&mut` 传给组装器和指令处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitState {
    /// 当前分隔符
    pub(crate) delimiter: Vec<u8>,
    pub(crate) quote: Option<Quote>,
    /// 是否处于未闭合的块注释中
    pub(crate) in_comment: bool,
    /// 引号内刚遇到转义字符，下一个字节按原样处理
    pub(crate) escape_pending: bool,
    /// 尚未被组装器消费的字节；`Some(vec![])` 表示一个空行
    pub(crate) pending: Option<Vec<u8>>,
    /// 正在累积的语句
    pub(crate) statement: Vec<u8>,
    pub(crate) in_progress: bool,
    /// 当前行号（仅用于诊断）
    pub(crate) line_number: u64,
    /// 正在累积的语句的起始行号
    pub(crate) first_line: u64,
}

impl SplitState {
    pub fn new(delimiter: Vec<u8>) -> Self {
        Self {
            delimiter,
            quote: None,
            in_comment: false,
            escape_pending: false,
            pending: None,
            statement: Vec::new(),
            in_progress: false,
            line_number: 0,
            first_line: 0,
        }
    }

    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    #[cfg(test)]
    pub fn quote(&self) -> Option<Quote> {
        self.quote
    }

    #[cfg(test)]
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    #[cfg(test)]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// 没有任何已累积的内容
    pub fn is_idle(&self) -> bool {
        self.statement.is_empty()
    }

    /// 放入新读取的一行
    pub(crate) fn load_line(&mut self, line: Vec<u8>, line_number: u64) {
        self.pending = Some(line);
        self.line_number = line_number;
    }

    /// 把已扫描的内容拼接到语句上，非首行时以换行连接
    fn append(&mut self, scanned: &[u8]) {
        if self.statement.is_empty() {
            self.first_line = self.line_number;
        } else {
            self.statement.push(LINE_JOINER);
        }
        self.statement.extend_from_slice(scanned);
    }

    /// 取出已累积的语句并重置累积状态
    pub(crate) fn finish(&mut self, kind: StatementKind) -> Statement {
        self.in_progress = false;
        let bytes = mem::take(&mut self.statement);
        Statement::new(bytes, self.first_line, self.line_number, kind)
    }

    /// 输入结束时取出未以分隔符结尾的剩余语句
    pub(crate) fn finish_remainder(&mut self) -> Option<Statement> {
        if self.statement.is_empty() {
            self.in_progress = false;
            return None;
        }
        Some(self.finish(StatementKind::Sql))
    }
}

/// 方言相关的切分策略
pub(crate) trait SplitStrategy: Send {
    /// 在没有累积内容时检查待处理行是否为分隔符指令；
    /// 如果是，更新分隔符并把指令行本身作为语句返回
    fn directive(&self, state: &mut SplitState) -> Option<Statement>;

    /// 扫描待处理的字节
    fn feed(&self, state: &mut SplitState) -> Feed;
}

/// MySQL 风格的切分规则：`'`、`"`、`` ` `` 三种引号，引号内可转义，
/// `--`、`#` 单行注释，`/* */` 块注释，`delimiter` 指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MySqlStrategy {
    escape: u8,
}

impl MySqlStrategy {
    pub fn new(escape: u8) -> Self {
        Self { escape }
    }
}

impl SplitStrategy for MySqlStrategy {
    fn directive(&self, state: &mut SplitState) -> Option<Statement> {
        if !state.is_idle() || state.quote.is_some() || state.in_comment {
            return None;
        }
        let line = state.pending.as_deref()?;
        let delimiter = parse_delimiter_directive(line)?.to_vec();
        let line = state.pending.take()?;

        state.delimiter = delimiter;
        state.first_line = state.line_number;
        state.statement = line;
        Some(state.finish(StatementKind::DelimiterDirective))
    }

    fn feed(&self, state: &mut SplitState) -> Feed {
        let line = state.pending.take().unwrap_or_default();
        let len = line.len();
        let mut out = Vec::with_capacity(len);
        let mut i = 0;

        while i < len {
            let b = line[i];

            if let Some(quote) = state.quote {
                if state.escape_pending {
                    state.escape_pending = false;
                } else if b == self.escape {
                    state.escape_pending = true;
                } else if b == quote.byte() {
                    state.quote = None;
                }
                out.push(b);
                i += 1;
                continue;
            }

            let rest = &line[i..];

            if state.in_comment {
                if rest.starts_with(BLOCK_COMMENT_CLOSE) {
                    out.extend_from_slice(BLOCK_COMMENT_CLOSE);
                    i += BLOCK_COMMENT_CLOSE.len();
                    state.in_comment = false;
                } else {
                    out.push(b);
                    i += 1;
                }
                continue;
            }

            if let Some(quote) = Quote::from_byte(b) {
                state.quote = Some(quote);
                out.push(b);
                i += 1;
                continue;
            }

            if rest.starts_with(BLOCK_COMMENT_OPEN) {
                state.in_comment = true;
                state.in_progress = true;
                out.extend_from_slice(BLOCK_COMMENT_OPEN);
                i += BLOCK_COMMENT_OPEN.len();
                continue;
            }

            if rest.starts_with(LINE_COMMENT_DASHES) || b == LINE_COMMENT_HASH {
                // 单行注释吃掉本行剩余部分
                out.extend_from_slice(rest);
                break;
            }

            let delimiter_len = state.delimiter.len();
            if delimiter_len > 0 && rest.starts_with(&state.delimiter) {
                out.extend_from_slice(&rest[..delimiter_len]);
                let after = &rest[delimiter_len..];
                if !after.is_empty() {
                    state.pending = Some(after.to_vec());
                }
                state.append(&out);
                return Feed::Complete(state.finish(StatementKind::Sql));
            }

            out.push(b);
            i += 1;
        }

        state.append(&out);
        state.in_progress = true;
        Feed::Incomplete
    }
}
