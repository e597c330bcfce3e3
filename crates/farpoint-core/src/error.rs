//! 扫描错误
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的终止性错误；畸形行不在此列（静默跳过）
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty")]
    EmptyFile,

    #[error("cannot map {path:?}: {source}")]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid points found in {lines} line(s)")]
    NoValidPoints { lines: u64 },

    #[error("64-bit overflow on line {line}")]
    Overflow { line: u64 },
}
