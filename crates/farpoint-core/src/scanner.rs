//! 行扫描器：按 `\n` 切分逻辑行，每行取三个整数，畸形行跳到行尾
use tracing::trace;

use crate::error::ScanError;
use crate::options::{LineBounds, OverflowPolicy, ScanOptions};
use crate::tokenizer::{parse_integer, TokenError};
use crate::types::Point3D;

/// 扫描游标：缓冲区偏移 + 1 起始行号，只前进不回退
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanCursor {
    pub(crate) offset: usize,
    pub(crate) line: u64,
}

/// 单行的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    /// 三个坐标均解析成功
    Point(Point3D),
    /// 某个坐标槽位未能读到数字，整行跳过
    Malformed,
}

/// 逐行产出 `(行号, 结果)`；Checked 溢出时产出一次错误后结束
pub(crate) struct LineScanner<'a> {
    buf: &'a [u8],
    cursor: ScanCursor,
    overflow: OverflowPolicy,
    line_bounds: LineBounds,
    failed: bool,
}

impl<'a> LineScanner<'a> {
    pub(crate) fn new(buf: &'a [u8], opts: &ScanOptions) -> Self {
        Self {
            buf,
            cursor: ScanCursor::default(),
            overflow: opts.overflow,
            line_bounds: opts.line_bounds,
            failed: false,
        }
    }

    pub(crate) fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// 从 `from` 起第一个 `\n` 的位置；没有则为缓冲区末尾
    fn line_end(&self, from: usize) -> usize {
        match self.buf.get(from..).and_then(|rest| rest.iter().position(|&b| b == b'\n')) {
            Some(i) => from + i,
            None => self.buf.len(),
        }
    }

    /// 把游标推进到 `from` 之后的下一个换行符之后（或缓冲区末尾）
    fn skip_to_next_line(&mut self, from: usize) {
        let end = self.line_end(from);
        let next = if end < self.buf.len() { end + 1 } else { end };
        debug_assert!(next >= self.cursor.offset);
        self.cursor.offset = next;
    }

    fn scan_line(&mut self) -> Result<LineOutcome, ScanError> {
        let line = self.cursor.line;
        let mut pos = self.cursor.offset;
        // PerLine：分词器只看本行；CrossLines：换行也视为空白，可一路找到后续行
        let limit = match self.line_bounds {
            LineBounds::PerLine => self.line_end(pos),
            LineBounds::CrossLines => self.buf.len(),
        };

        let mut coords = [0i64; 3];
        for slot in coords.iter_mut() {
            match parse_integer(self.buf, &mut pos, limit, self.overflow) {
                Ok(v) => *slot = v,
                Err(TokenError::NoDigit) => {
                    trace!(line, offset = pos, "malformed line skipped");
                    self.skip_to_next_line(pos);
                    return Ok(LineOutcome::Malformed);
                }
                Err(TokenError::Overflow) => return Err(ScanError::Overflow { line }),
            }
        }

        // 第三个坐标之后的内容忽略
        self.skip_to_next_line(pos);
        Ok(LineOutcome::Point(Point3D { x: coords[0], y: coords[1], z: coords[2] }))
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Result<(u64, LineOutcome), ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.offset >= self.buf.len() {
            return None;
        }
        self.cursor.line += 1;
        let line = self.cursor.line;
        match self.scan_line() {
            Ok(outcome) => Some(Ok((line, outcome))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
