use crate::domain::bucket::{self, Bucket};
use crate::domain::types::PullSize;
use serde::{Deserialize, Serialize};

/// 分袋模板（配置文件对象）
///
/// 存储位置：config.json 的 `distribution_profiles` 数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionProfile {
    /// 模板 ID（用于选择/引用）
    pub profile_id: String,

    /// 显示名称
    pub title: String,

    /// 说明（可选）
    #[serde(default)]
    pub description: Option<String>,

    /// 集包袋模板（按装袋顺序）
    #[serde(default)]
    pub buckets: Vec<BucketTemplate>,
}

/// 单个集包袋模板
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTemplate {
    #[serde(default)]
    pub size: Option<PullSize>,

    /// 最大件数（允许为负以便分配时报 InvalidCapacity）
    pub capacity: i64,
}

impl DistributionProfile {
    /// 实例化为集包袋列表（每次生成新的 bucket_id）
    pub fn instantiate(&self) -> Vec<Bucket> {
        self.buckets
            .iter()
            .map(|t| Bucket::new(t.size, t.capacity))
            .collect()
    }

    /// 模板总容量（负容量按 0 计）
    pub fn total_capacity(&self) -> u64 {
        bucket::total_capacity(self.buckets.iter().map(|t| t.capacity))
    }
}
