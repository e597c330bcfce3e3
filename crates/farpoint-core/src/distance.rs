//! 平方距离计算与“当前最远点”记录
use crate::options::OverflowPolicy;
use crate::types::{FarthestPoint, Point3D};

/// x² + y² + z²；Checked 策略下任一步溢出返回 None
pub(crate) fn squared_distance(p: Point3D, overflow: OverflowPolicy) -> Option<i64> {
    match overflow {
        OverflowPolicy::Wrapping => Some(
            p.x.wrapping_mul(p.x)
                .wrapping_add(p.y.wrapping_mul(p.y))
                .wrapping_add(p.z.wrapping_mul(p.z)),
        ),
        OverflowPolicy::Checked => {
            let xx = p.x.checked_mul(p.x)?;
            let yy = p.y.checked_mul(p.y)?;
            let zz = p.z.checked_mul(p.z)?;
            xx.checked_add(yy)?.checked_add(zz)
        }
    }
}

/// 流式最大值记录
///
/// 初始为“空”（None），不依赖哨兵值；空记录只接受非负距离，
/// 因此 Wrapping 下平方回绕为负数的点永远不会入选（与 -1 哨兵的历史行为一致）。
/// 只在严格更大时整体替换，平局保留先出现的点。
#[derive(Debug, Default)]
pub(crate) struct ResultRecord {
    best: Option<FarthestPoint>,
}

impl ResultRecord {
    /// 提交一个已算出距离的点；返回是否替换了当前记录
    pub(crate) fn offer(&mut self, p: Point3D, line_number: u64, d2: i64) -> bool {
        let better = match &self.best {
            None => d2 >= 0,
            Some(cur) => d2 > cur.max_distance_squared,
        };
        if better {
            self.best = Some(FarthestPoint { x: p.x, y: p.y, z: p.z, line_number, max_distance_squared: d2 });
        }
        better
    }

    pub(crate) fn into_inner(self) -> Option<FarthestPoint> {
        self.best
    }
}
