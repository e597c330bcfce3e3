//! 选项文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::options::{BufferMode, LineBounds, OverflowPolicy, ScanOptions};

/// 选项文件结构：所有键均可省略，省略时取默认值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct OptionsFile {
    buffer: Option<BufferMode>,
    overflow: Option<OverflowPolicy>,
    line_bounds: Option<LineBounds>,
    max_file_size: Option<u64>,
}

impl From<OptionsFile> for ScanOptions {
    fn from(f: OptionsFile) -> Self {
        Self {
            buffer: f.buffer.unwrap_or_default(),
            overflow: f.overflow.unwrap_or_default(),
            line_bounds: f.line_bounds.unwrap_or_default(),
            max_file_size: f.max_file_size,
        }
    }
}

fn parse_options(txt: &str) -> Result<ScanOptions> {
    let parsed: OptionsFile = toml::from_str(txt)?;
    Ok(parsed.into())
}

/// 从 TOML 文件加载扫描选项
pub fn load_options(path: &Path) -> Result<ScanOptions> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read options file {:?}", path))?;
    parse_options(&txt).with_context(|| format!("parse options file {:?}", path))
}
