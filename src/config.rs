//! Splitter 配置模块
//!
//! 提供方言选择以及切分器的可调参数（转义字符、初始分隔符、读缓冲大小），
//! 使得新增方言时只需扩展配置与策略，而不需要修改游标的驱动逻辑。

use std::fmt;
use std::str::FromStr;

use crate::error::SplitError;
use crate::splitter::constants::{DEFAULT_BUFFER_CAPACITY, DEFAULT_DELIMITER, DEFAULT_ESCAPE};
use crate::splitter::{MySqlStrategy, SplitStrategy};

/// 数据库方言
///
/// 目前所有方言共用同一套 MySQL 风格的切分规则，其余取值为后续扩展保留。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    #[default]
    Default,
    MySQL,
    PostgreSQL,
    SQLite,
    MSSQL,
    Oracle,
}

impl Dialect {
    /// 所有已知方言
    pub const ALL: [Dialect; 6] = [
        Dialect::Default,
        Dialect::MySQL,
        Dialect::PostgreSQL,
        Dialect::SQLite,
        Dialect::MSSQL,
        Dialect::Oracle,
    ];

    /// 方言名称
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Default => "Default",
            Dialect::MySQL => "MySQL",
            Dialect::PostgreSQL => "PostgreSQL",
            Dialect::SQLite => "SQLite",
            Dialect::MSSQL => "MSSQL",
            Dialect::Oracle => "Oracle",
        }
    }

    /// 根据方言选择切分策略
    ///
    /// # 参数
    ///
    /// * `escape` - 引号内使用的转义字节
    pub(crate) fn strategy(self, escape: u8) -> Box<dyn SplitStrategy> {
        match self {
            Dialect::Default
            | Dialect::MySQL
            | Dialect::PostgreSQL
            | Dialect::SQLite
            | Dialect::MSSQL
            | Dialect::Oracle => Box::new(MySqlStrategy::new(escape)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SplitError::UnknownDialect(s.to_string()))
    }
}

/// Splitter 配置
///
/// 定义切分器的行为参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    /// 方言选择
    pub dialect: Dialect,

    /// 引号内的转义字节，默认反斜杠
    pub escape: u8,

    /// 初始语句分隔符，默认 `;`
    pub delimiter: Vec<u8>,

    /// 底层读缓冲区容量（字节）
    pub buffer_capacity: usize,
}

impl SplitterConfig {
    /// 指定方言，其余参数取默认值
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = escape;
        self
    }

    /// 设置初始分隔符；空分隔符会被忽略
    pub fn with_delimiter(mut self, delimiter: impl AsRef<[u8]>) -> Self {
        let delimiter = delimiter.as_ref();
        if !delimiter.is_empty() {
            self.delimiter = delimiter.to_vec();
        }
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Default,
            escape: DEFAULT_ESCAPE,
            delimiter: DEFAULT_DELIMITER.to_vec(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplitterConfig::default();
        assert_eq!(config.dialect, Dialect::Default);
        assert_eq!(config.escape, b'\\');
        assert_eq!(config.delimiter, b";");
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::Default.to_string(), "Default");
        assert_eq!(Dialect::MySQL.to_string(), "MySQL");
        assert_eq!(Dialect::PostgreSQL.to_string(), "PostgreSQL");
        assert_eq!(Dialect::SQLite.to_string(), "SQLite");
        assert_eq!(Dialect::MSSQL.to_string(), "MSSQL");
        assert_eq!(Dialect::Oracle.to_string(), "Oracle");
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("mysql".parse::<Dialect>(), Ok(Dialect::MySQL));
        assert_eq!(" Oracle ".parse::<Dialect>(), Ok(Dialect::Oracle));
        assert_eq!(
            "db2".parse::<Dialect>(),
            Err(SplitError::UnknownDialect("db2".to_string()))
        );
    }

    #[test]
    fn test_builder_ignores_empty_delimiter() {
        let config = SplitterConfig::for_dialect(Dialect::SQLite)
            .with_delimiter("")
            .with_escape(b'^')
            .with_buffer_capacity(0);
        assert_eq!(config.delimiter, b";");
        assert_eq!(config.escape, b'^');
        assert_eq!(config.buffer_capacity, 1);
        assert_eq!(config.dialect, Dialect::SQLite);
    }
}
