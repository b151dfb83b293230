// ==========================================
// 物流包裹分袋系统 - 分配方案领域模型
// ==========================================
// 用途: 一次分配运行的结果
// 红线: 各袋分配按袋顺序拼接后是选择的前缀, unassigned 恰为剩余后缀
// ==========================================

use crate::domain::bucket::{self, Bucket};
use serde::{Deserialize, Serialize};

// ==========================================
// BucketAssignment - 单袋分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAssignment {
    pub pull_number: usize, // 袋序号 (从1开始)
    pub bucket: Bucket,     // 集包袋定义
    pub items: Vec<String>, // 分配到的条目 (保持选择顺序)
}

impl BucketAssignment {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 装填率（容量为 0 时返回 0.0）
    pub fn fill_ratio(&self) -> f64 {
        if self.bucket.capacity <= 0 {
            return 0.0;
        }
        self.items.len() as f64 / self.bucket.capacity as f64
    }
}

// ==========================================
// CapacitySummary - 容量汇总
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub total_capacity: u64, // 总容量
    pub item_count: usize,   // 待分配件数
    pub is_sufficient: bool, // 容量是否足够
    pub shortfall: usize,    // 缺少的空位数
}

impl CapacitySummary {
    pub fn new(total_capacity: u64, item_count: usize) -> Self {
        let shortfall = (item_count as u64).saturating_sub(total_capacity) as usize;
        Self {
            total_capacity,
            item_count,
            is_sufficient: shortfall == 0,
            shortfall,
        }
    }
}

// ==========================================
// AllocationPlan - 分配方案
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub assignments: Vec<BucketAssignment>, // 与输入袋顺序一致
    pub unassigned: Vec<String>,            // 超出总容量的尾部条目
}

impl AllocationPlan {
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(|a| a.items.len()).sum()
    }

    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// 总容量（负容量按 0 计，溢出时饱和）
    pub fn total_capacity(&self) -> u64 {
        bucket::total_capacity(self.assignments.iter().map(|a| a.bucket.capacity))
    }

    pub fn capacity_summary(&self) -> CapacitySummary {
        CapacitySummary::new(
            self.total_capacity(),
            self.assigned_count() + self.unassigned_count(),
        )
    }

    /// 至少分到一件的袋（下游据此生成集包袋记录）
    pub fn occupied(&self) -> impl Iterator<Item = &BucketAssignment> + '_ {
        self.assignments.iter().filter(|a| !a.is_empty())
    }

    /// 按袋顺序拼接全部分配，再接上未分配尾部
    pub fn flatten(&self) -> Vec<String> {
        self.assignments
            .iter()
            .flat_map(|a| a.items.iter())
            .chain(self.unassigned.iter())
            .cloned()
            .collect()
    }
}
