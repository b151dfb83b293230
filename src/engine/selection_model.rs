// ==========================================
// 物流包裹分袋系统 - 选择排序模型
// ==========================================
// 职责: 维护"可选/已选"划分与已选条目的用户顺序
// 输入: 目录 + 当前选择
// 输出: 新的选择值 (不修改输入)
// ==========================================
// 移动约定: to 下标相对于"移除 from 之后"的序列
// ==========================================

use crate::domain::catalog::Catalog;
use crate::domain::selection::Selection;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument};

// ==========================================
// SelectionOrderModel - 选择排序模型
// ==========================================
// 只借用目录，本身不持有可变状态；当前选择由调用方保存
#[derive(Debug, Clone, Copy)]
pub struct SelectionOrderModel<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectionOrderModel<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    // ==========================================
    // 选择 / 取消
    // ==========================================

    /// 选中条目（追加到末尾，已选中时原样返回）
    ///
    /// # 错误
    /// - `InvalidItem`: 条目不在目录中
    pub fn select(&self, selection: &Selection, item_id: &str) -> EngineResult<Selection> {
        self.ensure_known(item_id)?;

        if selection.contains(item_id) {
            return Ok(selection.clone());
        }

        let mut items = selection.as_slice().to_vec();
        items.push(item_id.to_string());
        Ok(Selection::from_vec_unchecked(items))
    }

    /// 取消选中（未选中时原样返回）
    pub fn unselect(&self, selection: &Selection, item_id: &str) -> Selection {
        let items = selection
            .iter()
            .filter(|id| *id != item_id)
            .map(str::to_string)
            .collect();
        Selection::from_vec_unchecked(items)
    }

    /// 切换选中状态
    ///
    /// 固定显示的条目处于选中状态时保持不变
    pub fn toggle(&self, selection: &Selection, item_id: &str) -> EngineResult<Selection> {
        let entry = self
            .catalog
            .get(item_id)
            .ok_or_else(|| EngineError::InvalidItem {
                item_id: item_id.to_string(),
            })?;

        if !selection.contains(item_id) {
            return self.select(selection, item_id);
        }

        if entry.pinned {
            debug!(item_id, "固定条目不可取消选中");
            return Ok(selection.clone());
        }

        Ok(self.unselect(selection, item_id))
    }

    /// 全选（目录自然顺序）
    pub fn select_all(&self) -> Selection {
        Selection::from_vec_unchecked(self.catalog.keys().map(str::to_string).collect())
    }

    /// 全部取消
    pub fn deselect_all(&self) -> Selection {
        Selection::empty()
    }

    /// 默认选择（目录中标记 default_selected 的条目）
    pub fn default_selection(&self) -> Selection {
        Selection::from_vec_unchecked(
            self.catalog
                .entries()
                .filter(|e| e.default_selected)
                .map(|e| e.item_id.clone())
                .collect(),
        )
    }

    // ==========================================
    // 排序
    // ==========================================

    /// 移动条目：从 `from_index` 取出，插入到移除后序列的 `to_index`
    ///
    /// # 错误
    /// - `IndexOutOfRange`: 任一下标不在 `[0, len)` 内
    ///
    /// # 示例
    /// `[a,b,c,d]` 执行 `move_item(0, 2)` 得到 `[b,c,a,d]`
    #[instrument(skip(self, selection), fields(len = selection.len()))]
    pub fn move_item(
        &self,
        selection: &Selection,
        from_index: usize,
        to_index: usize,
    ) -> EngineResult<Selection> {
        let len = selection.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(EngineError::IndexOutOfRange { index, len });
            }
        }

        if from_index == to_index {
            return Ok(selection.clone());
        }

        let mut items = selection.as_slice().to_vec();
        let moved = items.remove(from_index);
        items.insert(to_index, moved);

        Ok(Selection::from_vec_unchecked(items))
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 未选中的条目（目录自然顺序，惰性且可重复调用）
    pub fn available_items<'s>(
        &self,
        selection: &'s Selection,
    ) -> impl Iterator<Item = &'a str> + 's
    where
        'a: 's,
    {
        let catalog = self.catalog;
        catalog.keys().filter(move |id| !selection.contains(id))
    }

    /// 已选条目及其显示名称（选择顺序）
    pub fn labels<'s>(
        &self,
        selection: &'s Selection,
    ) -> impl Iterator<Item = (&'s str, &'s str)> + 's
    where
        'a: 's,
    {
        let catalog = self.catalog;
        selection
            .iter()
            .map(move |id| (id, catalog.label(id).unwrap_or(id)))
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn ensure_known(&self, item_id: &str) -> EngineResult<()> {
        if self.catalog.contains(item_id) {
            Ok(())
        } else {
            Err(EngineError::InvalidItem {
                item_id: item_id.to_string(),
            })
        }
    }
}
