// ==========================================
// 物流包裹分袋系统 - 核心库
// ==========================================
// 组成: 列选择排序模型 + 集包袋自动分配引擎
// 系统定位: 纯内存状态变换, 界面/落库/网络均由调用方负责
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 选择排序与分配
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PullSize, ValidationMode};

// 领域实体
pub use domain::{
    AllocationPlan, Bucket, BucketAssignment, CapacitySummary, Catalog, CatalogEntry, Selection,
};

// 引擎
pub use engine::{BucketAllocator, EngineError, EngineResult, SelectionOrderModel};

// API
pub use api::{ApiError, ApiResult, DistributionApi, SelectionApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "物流包裹分袋系统";
