// ==========================================
// 物流包裹分袋系统 - 集包袋分配引擎
// ==========================================
// 职责: 按顺序把有序条目连续地装入各集包袋
// 输入: 有序条目列表 + 有序集包袋列表
// 输出: AllocationPlan (每袋分配 + 未分配尾部)
// ==========================================
// 规则: 先装满第1袋，再装第2袋，依次类推
// 红线: 不改变条目顺序；容量不足通过 unassigned 表达，不是错误
// ==========================================

use crate::domain::bucket::{self, Bucket, CapacityConstraint};
use crate::domain::plan::{AllocationPlan, BucketAssignment, CapacitySummary};
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument};

// ==========================================
// BucketAllocator - 集包袋分配引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct BucketAllocator {
    // 无状态引擎，不需要注入依赖
}

impl BucketAllocator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分配条目到集包袋
    ///
    /// 规则:
    /// 1) 先校验全部容量非负，任何一个非法则整体失败
    /// 2) 按袋顺序维护游标，每袋取 min(容量, 剩余件数) 个连续条目
    /// 3) 游标之后的剩余条目记为未分配
    ///
    /// # 参数
    /// - `items`: 有序条目ID
    /// - `buckets`: 有序集包袋定义
    ///
    /// # 错误
    /// - `InvalidCapacity`: 存在负容量
    #[instrument(skip(self, items, buckets), fields(
        items_count = items.len(),
        buckets_count = buckets.len()
    ))]
    pub fn allocate(&self, items: &[String], buckets: &[Bucket]) -> EngineResult<AllocationPlan> {
        self.validate_capacities(buckets)?;

        let mut cursor = 0usize;
        let mut assignments = Vec::with_capacity(buckets.len());

        for (idx, bucket) in buckets.iter().enumerate() {
            let take = bucket.take_count(items.len() - cursor);
            let assigned = items[cursor..cursor + take].to_vec();
            cursor += take;

            debug!(
                pull_number = idx + 1,
                bucket_id = %bucket.bucket_id,
                capacity = bucket.capacity,
                assigned = take,
                "集包袋分配完成"
            );

            assignments.push(BucketAssignment {
                pull_number: idx + 1,
                bucket: bucket.clone(),
                items: assigned,
            });
        }

        let unassigned = items[cursor..].to_vec();
        if !unassigned.is_empty() {
            debug!(unassigned = unassigned.len(), "容量不足，存在未分配条目");
        }

        Ok(AllocationPlan {
            assignments,
            unassigned,
        })
    }

    /// 计算容量汇总（不执行分配）
    ///
    /// # 错误
    /// - `InvalidCapacity`: 存在负容量
    pub fn capacity_summary(
        &self,
        item_count: usize,
        buckets: &[Bucket],
    ) -> EngineResult<CapacitySummary> {
        self.validate_capacities(buckets)?;

        let total_capacity = bucket::total_capacity(buckets.iter().map(|b| b.capacity));
        Ok(CapacitySummary::new(total_capacity, item_count))
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn validate_capacities(&self, buckets: &[Bucket]) -> EngineResult<()> {
        match buckets.iter().find(|b| !b.has_valid_capacity()) {
            Some(bucket) => Err(EngineError::InvalidCapacity {
                bucket_id: bucket.bucket_id.clone(),
                capacity: bucket.capacity,
            }),
            None => Ok(()),
        }
    }
}
