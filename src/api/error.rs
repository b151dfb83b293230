// ==========================================
// 物流包裹分袋系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎错误为调用方可读的错误消息
// 红线: 所有错误信息必须包含显式原因
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 引擎前置条件错误
    // ==========================================
    #[error("无效条目: {0}")]
    InvalidItem(String),

    #[error("重复条目: {0}")]
    DuplicateItem(String),

    #[error("下标越界: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("无效容量: bucket_id={bucket_id}, capacity={capacity}")]
    InvalidCapacity { bucket_id: String, capacity: i64 },

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 分袋下发校验失败（带详细原因）
    #[error("分袋校验失败: {reason}")]
    DispatchValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidItem { item_id } => ApiError::InvalidItem(item_id),
            EngineError::DuplicateItem { item_id } => ApiError::DuplicateItem(item_id),
            EngineError::IndexOutOfRange { index, len } => {
                ApiError::IndexOutOfRange { index, len }
            }
            EngineError::InvalidCapacity {
                bucket_id,
                capacity,
            } => ApiError::InvalidCapacity {
                bucket_id,
                capacity,
            },
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 违规类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    EmptyItems,
    EmptyBuckets,
    DuplicateItem,
    ZeroCapacity,
    NegativeCapacity,
    CapacityShortfall,
}

impl ViolationType {
    /// 自动修复模式下是否可以放行
    pub fn is_fixable(&self) -> bool {
        matches!(self, ViolationType::ZeroCapacity | ViolationType::CapacityShortfall)
    }
}

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 违规类型
    pub violation_type: ViolationType,
    /// 相关对象ID（条目ID / 集包袋ID，可为空）
    pub subject_id: Option<String>,
    /// 违规原因
    pub reason: String,
    /// 额外信息（可选）
    pub details: Option<serde_json::Value>,
}
