//! 公共类型（对外暴露）
use serde::Serialize;

/// 单行解析出的三维整数坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point3D {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// 扫描结果：距原点最远的点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FarthestPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    /// 1 起始的行号
    pub line_number: u64,
    pub max_distance_squared: i64,
}

impl FarthestPoint {
    pub fn point(&self) -> Point3D {
        Point3D { x: self.x, y: self.y, z: self.z }
    }
}

/// 单文件扫描统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// 已计数的行（含畸形行）
    pub lines: u64,
    /// 成功解析出三元组的行
    pub valid_points: u64,
    /// 被跳过的畸形行
    pub skipped_lines: u64,
    pub bytes_scanned: usize,
}

/// 扫描报告：结果 + 统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub farthest: FarthestPoint,
    pub stats: ScanStats,
}

/// 批量扫描统计（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct BatchStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub files_skipped: usize,
    pub outputs_written: usize,
}

/// 输出项结构（对应 JSON 数组的单个元素）
/// 成功时展开为 `file` + 最远点字段，失败时为 `file` + `error`
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem<'a> {
    pub file: &'a str,
    #[serde(flatten)]
    pub farthest: Option<FarthestPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
