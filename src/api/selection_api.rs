// ==========================================
// 物流包裹分袋系统 - 列选择 API
// ==========================================
// 职责: 包装 SelectionOrderModel, 提供列选择器所需的视图
// 红线: 当前选择由调用方保存, API 只返回新值
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::domain::catalog::Catalog;
use crate::domain::selection::Selection;
use crate::engine::SelectionOrderModel;
use crate::i18n;
use crate::perf::PerfGuard;

// ==========================================
// 视图对象
// ==========================================

/// 单列视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    pub item_id: String,
    pub label: String,
    /// 已选列表中的序号（从1开始，可选列表为 None）
    pub position: Option<usize>,
    pub pinned: bool,
}

/// 列选择器视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelectorView {
    pub available: Vec<ColumnView>,
    pub selected: Vec<ColumnView>,
    /// 空列表提示（两侧都有内容时为 None）
    pub hint: Option<String>,
}

// ==========================================
// SelectionApi - 列选择 API
// ==========================================
pub struct SelectionApi {
    catalog: Arc<Catalog>,
    locale: String,
}

impl SelectionApi {
    pub fn new(catalog: Arc<Catalog>, locale: impl Into<String>) -> Self {
        Self {
            catalog,
            locale: locale.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn model(&self) -> SelectionOrderModel<'_> {
        SelectionOrderModel::new(&self.catalog)
    }

    /// 校验并载入调用方保存的选择
    pub fn load_selection(&self, ids: &[String]) -> ApiResult<Selection> {
        Ok(Selection::from_ids(&self.catalog, ids.iter().cloned())?)
    }

    pub fn select(&self, selection: &Selection, item_id: &str) -> ApiResult<Selection> {
        let result = self.model().select(selection, item_id)?;
        tracing::debug!(item_id, selected = result.len(), "选中列");
        Ok(result)
    }

    pub fn unselect(&self, selection: &Selection, item_id: &str) -> Selection {
        let result = self.model().unselect(selection, item_id);
        tracing::debug!(item_id, selected = result.len(), "取消选中列");
        result
    }

    pub fn toggle(&self, selection: &Selection, item_id: &str) -> ApiResult<Selection> {
        Ok(self.model().toggle(selection, item_id)?)
    }

    pub fn select_all(&self) -> Selection {
        self.model().select_all()
    }

    pub fn deselect_all(&self) -> Selection {
        self.model().deselect_all()
    }

    pub fn default_selection(&self) -> Selection {
        self.model().default_selection()
    }

    /// 拖放排序
    pub fn move_item(
        &self,
        selection: &Selection,
        from_index: usize,
        to_index: usize,
    ) -> ApiResult<Selection> {
        let _perf = PerfGuard::new("move_column");
        Ok(self.model().move_item(selection, from_index, to_index)?)
    }

    /// 构建列选择器视图
    pub fn view(&self, selection: &Selection) -> ColumnSelectorView {
        let _perf = PerfGuard::new("column_selector_view");
        let model = self.model();

        let available: Vec<ColumnView> = model
            .available_items(selection)
            .filter_map(|id| self.catalog.get(id))
            .map(|entry| ColumnView {
                item_id: entry.item_id.clone(),
                label: entry.label.clone(),
                position: None,
                pinned: entry.pinned,
            })
            .collect();

        let selected: Vec<ColumnView> = model
            .labels(selection)
            .enumerate()
            .map(|(idx, (id, label))| ColumnView {
                item_id: id.to_string(),
                label: label.to_string(),
                position: Some(idx + 1),
                pinned: self.catalog.get(id).map(|e| e.pinned).unwrap_or(false),
            })
            .collect();

        let hint = if selected.is_empty() {
            Some(i18n::t_in(&self.locale, "selection.empty", &[]))
        } else if available.is_empty() {
            Some(i18n::t_in(&self.locale, "selection.all_selected", &[]))
        } else {
            None
        };

        ColumnSelectorView {
            available,
            selected,
            hint,
        }
    }
}
