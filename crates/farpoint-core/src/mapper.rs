//! 文件映射：打开 → 取元数据 → 拒绝空文件 → 只读映射（或整读）
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::ScanError;
use crate::options::BufferMode;

/// 整个文件的只读字节视图
/// - 由一次扫描独占；Drop 时释放映射（文件句柄在映射建立后即关闭）
/// - 不暴露增量读取，整个文件一次性可寻址
pub(crate) enum MappedFile {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl MappedFile {
    /// 按 `mode` 打开文件并建立只读视图
    pub(crate) fn open(path: &Path, mode: BufferMode) -> Result<Self, ScanError> {
        let file = File::open(path).map_err(|source| ScanError::Open { path: path.to_path_buf(), source })?;
        let len = file
            .metadata()
            .map_err(|source| ScanError::Stat { path: path.to_path_buf(), source })?
            .len();
        if len == 0 {
            return Err(ScanError::EmptyFile);
        }

        let view = match mode {
            BufferMode::Mmap => {
                // 映射期间文件可能被外部截断，这里与其他只读映射用法一致地接受该风险
                let mmap = unsafe { Mmap::map(&file) }
                    .map_err(|source| ScanError::Map { path: path.to_path_buf(), source })?;
                MappedFile::Mapped(mmap)
            }
            BufferMode::Read => {
                let mut buf = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
                let mut reader = file;
                reader
                    .read_to_end(&mut buf)
                    .map_err(|source| ScanError::Map { path: path.to_path_buf(), source })?;
                MappedFile::Owned(buf)
            }
        };

        // stat 与读取之间文件被清空
        if view.is_empty() {
            return Err(ScanError::EmptyFile);
        }
        debug!(?path, ?mode, len = view.len(), "file mapped");
        Ok(view)
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            MappedFile::Mapped(m) => &m[..],
            MappedFile::Owned(v) => &v[..],
        }
    }
}
