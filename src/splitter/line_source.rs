//! LineSource - 从底层字节流中按逻辑行读取
//!
//! 底层数据可能以任意大小的分片到达，一个逻辑行可能需要多次读取才能凑齐。
//! 行结束符（`\n` 以及其前的 `\r`）会被去掉。

use std::io::{BufRead, ErrorKind};

use log::warn;
use memchr::memchr;

use crate::error::SplitError;

/// 逻辑行读取器
pub struct LineSource<R: BufRead> {
    reader: R,
    /// 已读到输入末尾，或底层读取失败
    finished: bool,
    /// 读取失败前已拿到部分行内容时，错误推迟到下一次调用返回
    deferred_error: Option<SplitError>,
    lines_read: u64,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
            deferred_error: None,
            lines_read: 0,
        }
    }

    /// 已读取的逻辑行数
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 读取下一个逻辑行
    ///
    /// # 返回
    ///
    /// * `Ok(Some(line))` - 去掉行结束符的一行
    /// * `Ok(None)` - 输入结束；之后的调用会一直返回 `Ok(None)`
    /// * `Err(SplitError::IoError)` - 底层读取失败（`Interrupted` 会被重试）；
    ///   之后的调用返回 `Ok(None)`。
    ///   若失败前已读到部分行内容，先返回这部分内容，下一次调用再返回错误
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>, SplitError> {
        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }
        if self.finished {
            return Ok(None);
        }

        let mut line = Vec::new();
        let mut got_bytes = false;

        // 逐个分片拼接，直到遇到换行或输入结束
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                // 被信号打断不算失败，重新读取
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    warn!("line source failed after {} lines: {}", self.lines_read, e);
                    if !got_bytes {
                        return Err(e.into());
                    }
                    // 先交出已读到的部分
                    self.deferred_error = Some(e.into());
                    break;
                }
            };

            if buf.is_empty() {
                self.finished = true;
                if !got_bytes {
                    return Ok(None);
                }
                // 最后一行没有换行符
                break;
            }

            got_bytes = true;
            match memchr(b'\n', buf) {
                Some(pos) => {
                    line.extend_from_slice(&buf[..pos]);
                    self.reader.consume(pos + 1);
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                    break;
                }
                None => {
                    line.extend_from_slice(buf);
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }

        self.lines_read += 1;
        Ok(Some(line))
    }
}
