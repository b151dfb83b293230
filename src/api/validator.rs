// ==========================================
// 物流包裹分袋系统 - 分袋下发校验器
// ==========================================
// 职责: 分配方案生成集包袋记录前的输入校验
// 规则: 不能为空、不能重复、容量非负且每袋至少 1 件、总容量不少于件数
// ==========================================

use std::collections::HashSet;

use crate::api::error::{ApiError, ApiResult, ValidationViolation, ViolationType};
use crate::domain::bucket::{self, Bucket};

pub use crate::domain::types::ValidationMode;

// ==========================================
// DistributionValidator - 分袋下发校验器
// ==========================================

/// 分袋下发校验器
///
/// 职责：
/// 1. 待分配条目非空且不重复
/// 2. 至少配置一个集包袋，且每袋容量至少为 1
/// 3. 总容量不少于待分配件数
/// 4. 根据ValidationMode决定返回错误还是放行并返回警告
#[derive(Debug, Default, Clone, Copy)]
pub struct DistributionValidator;

impl DistributionValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验分袋下发
    ///
    /// # 返回
    /// - Ok(Vec<ValidationViolation>): 校验通过，返回被放行的警告（仅 AutoFix）
    /// - Err(ApiError::DispatchValidationError): 校验失败
    pub fn validate_dispatch(
        &self,
        items: &[String],
        buckets: &[Bucket],
        mode: ValidationMode,
    ) -> ApiResult<Vec<ValidationViolation>> {
        let violations = self.collect_violations(items, buckets);

        if violations.is_empty() {
            return Ok(violations);
        }

        let blocking = match mode {
            ValidationMode::Strict => violations.len(),
            ValidationMode::AutoFix => violations
                .iter()
                .filter(|v| !v.violation_type.is_fixable())
                .count(),
        };

        if blocking > 0 {
            return Err(ApiError::DispatchValidationError {
                reason: format!("{}项分袋校验未通过", blocking),
                violations,
            });
        }

        // AutoFix模式下，记录警告但允许操作
        tracing::warn!(
            count = violations.len(),
            "AutoFix模式: 忽略容量类违规，超出部分保持未分配"
        );
        Ok(violations)
    }

    /// 收集全部违规（不区分模式）
    pub fn collect_violations(
        &self,
        items: &[String],
        buckets: &[Bucket],
    ) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();

        if items.is_empty() {
            violations.push(ValidationViolation {
                violation_type: ViolationType::EmptyItems,
                subject_id: None,
                reason: "没有待分配的条目".to_string(),
                details: None,
            });
        }

        if buckets.is_empty() {
            violations.push(ValidationViolation {
                violation_type: ViolationType::EmptyBuckets,
                subject_id: None,
                reason: "没有配置集包袋".to_string(),
                details: None,
            });
        }

        let mut seen = HashSet::new();
        for item_id in items {
            if !seen.insert(item_id.as_str()) {
                violations.push(ValidationViolation {
                    violation_type: ViolationType::DuplicateItem,
                    subject_id: Some(item_id.clone()),
                    reason: format!("条目{}重复出现", item_id),
                    details: None,
                });
            }
        }

        for (idx, bucket) in buckets.iter().enumerate() {
            // 负容量不可放行（分配引擎会报 InvalidCapacity）
            let (violation_type, reason) = match bucket.capacity {
                c if c < 0 => (
                    ViolationType::NegativeCapacity,
                    format!("第{}袋容量不能为负数", idx + 1),
                ),
                0 => (
                    ViolationType::ZeroCapacity,
                    format!("第{}袋容量必须至少为1", idx + 1),
                ),
                _ => continue,
            };
            violations.push(ValidationViolation {
                violation_type,
                subject_id: Some(bucket.bucket_id.clone()),
                reason,
                details: Some(serde_json::json!({
                    "pull_number": idx + 1,
                    "capacity": bucket.capacity,
                })),
            });
        }

        let total_capacity = bucket::total_capacity(buckets.iter().map(|b| b.capacity));
        if !items.is_empty() && total_capacity < items.len() as u64 {
            violations.push(ValidationViolation {
                violation_type: ViolationType::CapacityShortfall,
                subject_id: None,
                reason: format!(
                    "总容量({})不足以容纳{}件",
                    total_capacity,
                    items.len()
                ),
                details: Some(serde_json::json!({
                    "total_capacity": total_capacity,
                    "item_count": items.len(),
                    "shortfall": items.len() as u64 - total_capacity,
                })),
            });
        }

        violations
    }
}
