//! 扫描选项（模块）
use serde::Deserialize;

/// 缓冲区来源
/// - Mmap：只读内存映射，内核按需调页。
/// - Read：一次性整读到堆内存，适合不支持映射的文件系统。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BufferMode {
    #[default]
    Mmap,
    Read,
}

/// 64 位整数溢出策略
/// - Wrapping：按二进制补码回绕；平方和回绕为负数的点不参与比较（等同于无效点）。
/// - Checked：累加或平方溢出时终止扫描并返回 `ScanError::Overflow`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    #[default]
    Wrapping,
    Checked,
}

/// 分词器跳过空白时的边界
/// - PerLine：只在当前行内寻找坐标，短行不会“借用”下一行的数字。
/// - CrossLines：空白包含换行，缺坐标的行会继续向后续行寻找数字（宽松模式）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBounds {
    #[default]
    PerLine,
    CrossLines,
}

/// 扫描选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// 缓冲区来源：映射或整读
    pub buffer: BufferMode,
    /// 溢出策略
    pub overflow: OverflowPolicy,
    /// 空白跳过边界
    pub line_bounds: LineBounds,
    /// 最大文件大小（字节）；仅 `scan_and_write` 生效（目录或单文件），超过则跳过
    pub max_file_size: Option<u64>,
}
