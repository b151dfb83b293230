// ==========================================
// 物流包裹分袋系统 - 引擎层
// ==========================================
// 职责: 纯函数式业务引擎, 输入不可变值, 输出新值
// 红线: 引擎不做 IO, 不持有可变状态
// ==========================================

pub mod bucket_allocator;
pub mod error;
pub mod selection_model;

// 重导出核心引擎
pub use bucket_allocator::BucketAllocator;
pub use error::{EngineError, EngineResult};
pub use selection_model::SelectionOrderModel;
