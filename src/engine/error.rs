// ==========================================
// 物流包裹分袋系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 引擎出错时不修改任何输入, 要么返回新值要么返回错误
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 均为调用方前置条件违反，不存在瞬时故障，不重试
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 引用了目录中不存在的条目（通常是界面持有过期选择）
    #[error("无效条目: item_id={item_id} 不在目录中")]
    InvalidItem { item_id: String },

    /// 初始选择中同一条目出现多次
    #[error("重复条目: item_id={item_id}")]
    DuplicateItem { item_id: String },

    /// 移动操作的下标越界
    #[error("下标越界: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 集包袋容量为负数
    #[error("无效容量: bucket_id={bucket_id}, capacity={capacity}")]
    InvalidCapacity { bucket_id: String, capacity: i64 },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
