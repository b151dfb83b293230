// ==========================================
// 物流包裹分袋系统 - 集包袋领域模型
// ==========================================
// 用途: 分配目标 (一个集包袋/容器)
// 红线: 只有数字容量参与分配, 尺寸标签对分配器不透明
// ==========================================

use crate::domain::types::PullSize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// Bucket - 集包袋
// ==========================================
// 容量使用有符号整数: 负值需要能被表达出来再被拒绝
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub bucket_id: String,       // 集包袋ID
    #[serde(default)]
    pub size: Option<PullSize>,  // 尺寸标签 (可未定义)
    pub capacity: i64,           // 最大件数
}

impl Bucket {
    /// 新建集包袋（自动生成ID）
    pub fn new(size: Option<PullSize>, capacity: i64) -> Self {
        Self {
            bucket_id: Uuid::new_v4().to_string(),
            size,
            capacity,
        }
    }

    /// 使用指定ID新建集包袋
    pub fn with_id(bucket_id: impl Into<String>, size: Option<PullSize>, capacity: i64) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            size,
            capacity,
        }
    }
}

/// 容量求和（负容量按 0 计，超出 u64 范围时饱和）
pub fn total_capacity<I>(capacities: I) -> u64
where
    I: IntoIterator<Item = i64>,
{
    capacities
        .into_iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.max(0) as u64))
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: BucketAllocator 约束检查接口
pub trait CapacityConstraint {
    /// 容量是否合法（非负）
    fn has_valid_capacity(&self) -> bool;

    /// 可容纳件数（负容量视为 0）
    fn usable_capacity(&self) -> usize;

    /// 在剩余 `remaining` 件时本袋实际接收的件数
    fn take_count(&self, remaining: usize) -> usize {
        self.usable_capacity().min(remaining)
    }
}

impl CapacityConstraint for Bucket {
    fn has_valid_capacity(&self) -> bool {
        self.capacity >= 0
    }

    fn usable_capacity(&self) -> usize {
        usize::try_from(self.capacity).unwrap_or(0)
    }
}
