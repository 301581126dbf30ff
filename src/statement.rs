use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

/// 语句类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementKind {
    /// 普通 SQL 语句（以分隔符结尾，或输入末尾的剩余内容）
    #[default]
    Sql,
    /// `delimiter xx` 指令行本身
    DelimiterDirective,
}

/// 切分得到的一条语句
///
/// 语句文本按原样保存为字节，多字节编码不做任何解释。
/// 跨行语句中的换行与空白原样保留。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    /// 语句原始字节（包含结尾的分隔符）
    pub bytes: Vec<u8>,

    /// 语句起始行号（从 1 开始）
    pub first_line: u64,

    /// 语句结束行号
    pub last_line: u64,

    /// 语句类型
    pub kind: StatementKind,
}

impl Statement {
    pub(crate) fn new(
        bytes: Vec<u8>,
        first_line: u64,
        last_line: u64,
        kind: StatementKind,
    ) -> Self {
        Self {
            bytes,
            first_line,
            last_line,
            kind,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 按 UTF-8 解码，失败时返回错误
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// 有损解码为文本，非法字节替换为 U+FFFD
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_string(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    pub fn is_directive(&self) -> bool {
        self.kind == StatementKind::DelimiterDirective
    }

    /// 是否只包含空白字符
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl AsRef<[u8]> for Statement {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_text_replaces_invalid_bytes() {
        let stmt = Statement::new(b"select '\xff';".to_vec(), 1, 1, StatementKind::Sql);
        assert!(stmt.to_str().is_err());
        assert_eq!(stmt.text(), "select '\u{FFFD}';");
        assert_eq!(stmt.into_string(), "select '\u{FFFD}';");
    }

    #[test]
    fn blank_statement() {
        let stmt = Statement::new(b" \t".to_vec(), 3, 3, StatementKind::Sql);
        assert!(stmt.is_blank());
        assert!(!stmt.is_directive());
        assert_eq!(stmt.len(), 2);
    }
}
