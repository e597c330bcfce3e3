//! 扫描主流程：单文件扫描与目录批量输出
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::distance::{squared_distance, ResultRecord};
use crate::error::ScanError;
use crate::mapper::MappedFile;
use crate::options::ScanOptions;
use crate::scanner::{LineOutcome, LineScanner};
use crate::types::{BatchStats, FarthestPoint, OutputItem, ScanReport, ScanStats};

/// 扫描单个文件，返回距原点最远的点（默认选项）
pub fn scan(path: &Path) -> Result<FarthestPoint, ScanError> {
    scan_with_options(path, &ScanOptions::default()).map(|r| r.farthest)
}

/// 按给定选项扫描单个文件，并附带统计信息
/// 映射在函数返回时随 `MappedFile` 一并释放（成功、溢出、无有效点皆然）
pub fn scan_with_options(path: &Path, opts: &ScanOptions) -> Result<ScanReport, ScanError> {
    let view = MappedFile::open(path, opts.buffer)?;
    let report = scan_bytes(&view, opts);
    if let Err(e) = &report {
        debug!(?path, error = %e, "scan failed");
    }
    report
}

/// 在内存缓冲区上执行扫描核心
pub fn scan_bytes(buf: &[u8], opts: &ScanOptions) -> Result<ScanReport, ScanError> {
    if buf.is_empty() {
        return Err(ScanError::EmptyFile);
    }

    let mut record = ResultRecord::default();
    let mut stats = ScanStats { bytes_scanned: buf.len(), ..Default::default() };

    let mut scanner = LineScanner::new(buf, opts);
    for item in scanner.by_ref() {
        let (line, outcome) = item?;
        stats.lines = line;
        match outcome {
            LineOutcome::Point(p) => {
                let d2 = squared_distance(p, opts.overflow).ok_or(ScanError::Overflow { line })?;
                stats.valid_points += 1;
                record.offer(p, line, d2);
            }
            LineOutcome::Malformed => stats.skipped_lines += 1,
        }
    }

    debug_assert_eq!(scanner.cursor().offset, buf.len());
    debug!(lines = stats.lines, valid = stats.valid_points, skipped = stats.skipped_lines, "buffer scanned");
    match record.into_inner() {
        Some(farthest) => Ok(ScanReport { farthest, stats }),
        None => Err(ScanError::NoValidPoints { lines: stats.lines }),
    }
}

/// 收集待扫描文件：单文件直接返回；目录仅取第一层的普通文件，按文件名排序
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = vec![];
    for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    // 按文件名排序，确保输出顺序稳定
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// 扫描文件或目录并将结果以 JSON 数组流式写入 `out`
/// - 每个文件独立扫描，失败的文件输出 `{"file", "error"}`，不影响其余文件
/// - 超过 `max_file_size` 的文件直接跳过，不产生输出项
pub fn scan_and_write(input: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<BatchStats> {
    let files = collect_inputs(input)?;
    let mut stats = BatchStats::default();

    write!(out, "[")?;
    let mut first = true;
    for path in files {
        if let Some(max) = opts.max_file_size {
            if let Ok(md) = std::fs::metadata(&path) {
                if md.len() > max {
                    debug!(?path, len = md.len(), max, "file too large, skipped");
                    stats.files_skipped += 1;
                    continue;
                }
            }
        }

        let file = path.display().to_string();
        let item = match scan_with_options(&path, opts) {
            Ok(report) => {
                stats.files_scanned += 1;
                OutputItem { file: &file, farthest: Some(report.farthest), error: None }
            }
            Err(e) => {
                stats.files_failed += 1;
                OutputItem { file: &file, farthest: None, error: Some(e.to_string()) }
            }
        };

        if !first { write!(out, ",")?; } else { first = false; }
        serde_json::to_writer(&mut *out, &item)?;
        stats.outputs_written += 1;
    }
    write!(out, "]")?;
    Ok(stats)
}
