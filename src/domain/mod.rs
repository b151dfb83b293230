// ==========================================
// 物流包裹分袋系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、约束接口
// 红线: 不含引擎逻辑, 不含任何 IO
// ==========================================

pub mod bucket;
pub mod catalog;
pub mod plan;
pub mod selection;
pub mod types;

// 重导出核心类型
pub use bucket::{total_capacity, Bucket, CapacityConstraint};
pub use catalog::{Catalog, CatalogEntry};
pub use plan::{AllocationPlan, BucketAssignment, CapacitySummary};
pub use selection::Selection;
pub use types::{PullSize, ValidationMode};
