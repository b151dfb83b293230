// ==========================================
// 物流包裹分袋系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供界面层/命令行调用
// ==========================================

pub mod distribution_api;
pub mod error;
pub mod selection_api;
pub mod validator;

// 重导出核心类型
pub use distribution_api::{
    DispatchResult, DistributionApi, DistributionPreview, PullDraft, PullPreview,
};
pub use error::{ApiError, ApiResult, ValidationViolation, ViolationType};
pub use selection_api::{ColumnSelectorView, ColumnView, SelectionApi};
pub use validator::{DistributionValidator, ValidationMode};
