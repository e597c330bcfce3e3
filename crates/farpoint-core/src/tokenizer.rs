//! 整数分词器：空白* → 符号? → 数字+
use crate::options::OverflowPolicy;

/// 分词失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenError {
    /// 在 `end` 之前没有遇到任何数字
    NoDigit,
    /// Checked 策略下累加超出 i64
    Overflow,
}

/// C `isspace` 的字节集合（含换行、回车、\v、\f）
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// 从 `*pos` 起解析一个可带符号的十进制整数，只读取 `buf[..end]`
///
/// - 成功：返回带符号的值，`*pos` 停在最后一位数字之后
/// - 失败：`*pos` 保留已消费的空白与符号，不回退
///
/// 数字逐位按符号累加（`v = v*10 ± d`），因此 Checked 模式下 `i64::MIN` 也可表示；
/// Wrapping 模式下结果与“先累加再取负”的二进制补码回绕完全一致。
pub(crate) fn parse_integer(buf: &[u8], pos: &mut usize, end: usize, overflow: OverflowPolicy) -> Result<i64, TokenError> {
    let end = end.min(buf.len());
    let mut i = (*pos).min(end);

    while i < end && is_space(buf[i]) {
        i += 1;
    }

    let mut sign: i64 = 1;
    if i < end && (buf[i] == b'-' || buf[i] == b'+') {
        if buf[i] == b'-' { sign = -1; }
        i += 1;
    }

    let digits_start = i;
    let mut value: i64 = 0;
    while i < end && buf[i].is_ascii_digit() {
        let d = i64::from(buf[i] - b'0') * sign;
        value = match overflow {
            OverflowPolicy::Wrapping => value.wrapping_mul(10).wrapping_add(d),
            OverflowPolicy::Checked => match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
                Some(v) => v,
                None => {
                    *pos = i;
                    return Err(TokenError::Overflow);
                }
            },
        };
        i += 1;
    }

    *pos = i;
    if i == digits_start {
        return Err(TokenError::NoDigit);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str, policy: OverflowPolicy) -> (Result<i64, TokenError>, usize) {
        let mut pos = 0;
        let r = parse_integer(s.as_bytes(), &mut pos, s.len(), policy);
        (r, pos)
    }

    #[test]
    fn skips_whitespace_and_applies_sign() {
        assert_eq!(parse("  \t42 ", OverflowPolicy::Wrapping), (Ok(42), 5));
        assert_eq!(parse("-17", OverflowPolicy::Wrapping), (Ok(-17), 3));
        assert_eq!(parse("+8x", OverflowPolicy::Wrapping), (Ok(8), 2));
        assert_eq!(parse("\r\n\x0b\x0c7", OverflowPolicy::Wrapping), (Ok(7), 5));
    }

    #[test]
    fn no_digit_keeps_consumed_prefix() {
        assert_eq!(parse("  -abc", OverflowPolicy::Wrapping), (Err(TokenError::NoDigit), 3));
        assert_eq!(parse("   ", OverflowPolicy::Wrapping), (Err(TokenError::NoDigit), 3));
        assert_eq!(parse("", OverflowPolicy::Wrapping), (Err(TokenError::NoDigit), 0));
        // 只允许一个符号
        assert_eq!(parse("--5", OverflowPolicy::Wrapping), (Err(TokenError::NoDigit), 1));
    }

    #[test]
    fn end_bound_is_respected() {
        let buf = b"12 34";
        let mut pos = 2;
        assert_eq!(parse_integer(buf, &mut pos, 3, OverflowPolicy::Wrapping), Err(TokenError::NoDigit));
        assert_eq!(pos, 3);

        let mut pos = 0;
        assert_eq!(parse_integer(buf, &mut pos, 1, OverflowPolicy::Wrapping), Ok(1));
        assert_eq!(pos, 1);
    }

    #[test]
    fn extreme_values() {
        assert_eq!(parse("9223372036854775807", OverflowPolicy::Checked).0, Ok(i64::MAX));
        assert_eq!(parse("-9223372036854775808", OverflowPolicy::Checked).0, Ok(i64::MIN));
        assert_eq!(parse("9223372036854775808", OverflowPolicy::Checked).0, Err(TokenError::Overflow));
        // 回绕：2^63 → i64::MIN
        assert_eq!(parse("9223372036854775808", OverflowPolicy::Wrapping).0, Ok(i64::MIN));
        assert_eq!(parse("18446744073709551617", OverflowPolicy::Wrapping).0, Ok(1));
    }
}
