// ==========================================
// 物流包裹分袋系统 - 自动分袋 API
// ==========================================
// 职责: 分袋预览、下发前校验、生成集包袋草稿
// 红线: 只产出草稿, 不负责落库/打印/导出
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::api::validator::{DistributionValidator, ValidationMode};
use crate::config::ConfigManager;
use crate::domain::bucket::Bucket;
use crate::domain::plan::{AllocationPlan, CapacitySummary};
use crate::domain::types::PullSize;
use crate::engine::BucketAllocator;
use crate::i18n;
use crate::perf::PerfGuard;

// ==========================================
// 响应对象
// ==========================================

/// 单袋预览
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullPreview {
    pub pull_number: usize,
    pub bucket_id: String,
    pub size: Option<PullSize>,
    /// 尺寸显示文本（未定义时为本地化提示）
    pub size_label: String,
    pub capacity: i64,
    pub item_count: usize,
    pub items: Vec<String>,
}

/// 分袋预览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPreview {
    pub plan: AllocationPlan,
    pub summary: CapacitySummary,
    /// 至少分到一件的袋
    pub pulls: Vec<PullPreview>,
    /// 本地化提示（容量汇总、溢出说明）
    pub notices: Vec<String>,
}

/// 集包袋草稿（调用方据此创建真实记录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullDraft {
    pub pull_number: usize,
    pub total_pulls: usize,
    pub destiny: String,
    pub bucket_id: String,
    pub size: Option<PullSize>,
    pub item_ids: Vec<String>,
    /// 条码上方的序号标签，如 "PULL 1/3"
    pub label: String,
}

/// 下发结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub drafts: Vec<PullDraft>,
    pub unassigned: Vec<String>,
    /// AutoFix 模式下被放行的违规
    pub warnings: Vec<ValidationViolation>,
}

// ==========================================
// DistributionApi - 自动分袋 API
// ==========================================
pub struct DistributionApi {
    allocator: BucketAllocator,
    validator: DistributionValidator,
    config: Arc<ConfigManager>,
}

impl DistributionApi {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self {
            allocator: BucketAllocator::new(),
            validator: DistributionValidator::new(),
            config,
        }
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    // ==========================================
    // 集包袋配置
    // ==========================================

    /// 按默认值新建一个集包袋（表单"添加集包袋"）
    pub fn new_bucket(&self) -> Bucket {
        self.config.new_bucket()
    }

    /// 按模板生成集包袋列表
    pub fn buckets_from_profile(&self, profile_id: &str) -> ApiResult<Vec<Bucket>> {
        self.config
            .build_buckets(profile_id)
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 容量汇总（不执行分配）
    pub fn capacity_summary(
        &self,
        item_count: usize,
        buckets: &[Bucket],
    ) -> ApiResult<CapacitySummary> {
        Ok(self.allocator.capacity_summary(item_count, buckets)?)
    }

    // ==========================================
    // 预览
    // ==========================================

    /// 分袋预览
    ///
    /// 容量不足不是错误，超出部分体现在 plan.unassigned 和 notices 中
    pub fn preview(&self, items: &[String], buckets: &[Bucket]) -> ApiResult<DistributionPreview> {
        let _perf = PerfGuard::new("preview_distribution");

        let plan = self.allocator.allocate(items, buckets)?;
        let summary = plan.capacity_summary();
        let locale = self.config.locale();

        let pulls = plan
            .occupied()
            .map(|a| PullPreview {
                pull_number: a.pull_number,
                bucket_id: a.bucket.bucket_id.clone(),
                size: a.bucket.size,
                size_label: self.size_label(a.bucket.size),
                capacity: a.bucket.capacity,
                item_count: a.items.len(),
                items: a.items.clone(),
            })
            .collect();

        let mut notices = Vec::new();
        if !buckets.is_empty() {
            notices.push(Self::capacity_notice(locale, &summary));
        }
        if plan.unassigned_count() > 0 {
            notices.push(i18n::t_in(
                locale,
                "capacity.overflow",
                &[("count", &plan.unassigned_count().to_string())],
            ));
        }

        tracing::info!(
            items = items.len(),
            buckets = buckets.len(),
            assigned = plan.assigned_count(),
            unassigned = plan.unassigned_count(),
            "分袋预览完成"
        );

        Ok(DistributionPreview {
            plan,
            summary,
            pulls,
            notices,
        })
    }

    // ==========================================
    // 下发
    // ==========================================

    /// 校验并生成集包袋草稿
    ///
    /// # 参数
    /// - `destiny`: 共同目的地
    /// - `mode`: 校验模式（None 时使用配置值）
    ///
    /// # 返回
    /// 只为分到条目的袋生成草稿，序号连续从1开始
    pub fn dispatch(
        &self,
        destiny: &str,
        items: &[String],
        buckets: &[Bucket],
        mode: Option<ValidationMode>,
    ) -> ApiResult<DispatchResult> {
        let _perf = PerfGuard::new("dispatch_distribution");

        let destiny = destiny.trim();
        if destiny.is_empty() {
            return Err(ApiError::InvalidInput("目的地不能为空".to_string()));
        }

        let mode = mode.unwrap_or_else(|| self.config.validation_mode());
        let warnings = self.validator.validate_dispatch(items, buckets, mode)?;
        let plan = self.allocator.allocate(items, buckets)?;

        let locale = self.config.locale();
        let occupied: Vec<_> = plan.occupied().collect();
        let total_pulls = occupied.len();

        let drafts = occupied
            .into_iter()
            .enumerate()
            .map(|(idx, a)| {
                let number = idx + 1;
                PullDraft {
                    pull_number: number,
                    total_pulls,
                    destiny: destiny.to_string(),
                    bucket_id: a.bucket.bucket_id.clone(),
                    size: a.bucket.size,
                    item_ids: a.items.clone(),
                    label: i18n::t_in(
                        locale,
                        "pull.label",
                        &[
                            ("number", &number.to_string()),
                            ("total", &total_pulls.to_string()),
                        ],
                    ),
                }
            })
            .collect();

        tracing::info!(
            destiny,
            mode = %mode,
            pulls = total_pulls,
            unassigned = plan.unassigned_count(),
            warnings = warnings.len(),
            "分袋下发草稿生成完成"
        );

        Ok(DispatchResult {
            drafts,
            unassigned: plan.unassigned,
            warnings,
        })
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn size_label(&self, size: Option<PullSize>) -> String {
        match size {
            Some(size) => size.to_string(),
            None => i18n::t_in(self.config.locale(), "pull.size_undefined", &[]),
        }
    }

    fn capacity_notice(locale: &str, summary: &CapacitySummary) -> String {
        let capacity = summary.total_capacity.to_string();
        let items = summary.item_count.to_string();
        if summary.is_sufficient {
            i18n::t_in(
                locale,
                "capacity.sufficient",
                &[("capacity", &capacity), ("items", &items)],
            )
        } else {
            i18n::t_in(
                locale,
                "capacity.shortfall",
                &[
                    ("capacity", &capacity),
                    ("items", &items),
                    ("missing", &summary.shortfall.to_string()),
                ],
            )
        }
    }
}
