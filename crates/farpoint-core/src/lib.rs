//! 最远点扫描库
//!
//! 设计要点：
//! - 整个文件以只读方式映射为字节切片（或整读），由操作系统按需分页。
//! - 逐行扫描：每行调用三次整数分词器取得 x/y/z，失败则跳到行尾继续。
//! - 流式维护“最大平方距离”，仅在严格更大时替换，平局保留最早出现的点。
//! - 畸形行不报错，只计入行号与统计。

mod options;
mod types;
mod error;
mod mapper;
mod tokenizer;
mod distance;
mod scanner;
mod config;
mod scan;

pub use options::{BufferMode, LineBounds, OverflowPolicy, ScanOptions};
pub use types::{BatchStats, FarthestPoint, OutputItem, Point3D, ScanReport, ScanStats};
pub use error::ScanError;
pub use config::load_options;
pub use scan::{scan, scan_and_write, scan_bytes, scan_with_options};
