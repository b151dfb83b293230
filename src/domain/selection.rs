// ==========================================
// 物流包裹分袋系统 - 选择领域模型
// ==========================================
// 用途: 目录中被选中条目的有序序列
// 红线: 无重复; 每个元素都能在目录中解析
// 红线: 只通过 SelectionOrderModel 产生新值, 不就地修改
// ==========================================

use crate::domain::catalog::Catalog;
use crate::engine::error::{EngineError, EngineResult};
use serde::Serialize;
use std::collections::HashSet;

// ==========================================
// Selection - 有序选择
// ==========================================
// 只序列化不反序列化: 外部输入必须经过 from_ids 校验
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    /// 空选择
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// 校验调用方提供的初始选择
    ///
    /// # 错误
    /// - `InvalidItem`: 条目不在目录中
    /// - `DuplicateItem`: 条目重复出现
    pub fn from_ids<I, S>(catalog: &Catalog, ids: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for id in ids {
            let id = id.into();
            if !catalog.contains(&id) {
                return Err(EngineError::InvalidItem { item_id: id });
            }
            if !seen.insert(id.clone()) {
                return Err(EngineError::DuplicateItem { item_id: id });
            }
            items.push(id);
        }

        Ok(Self(items))
    }

    /// 引擎内部构造（调用方已保证不变量）
    pub(crate) fn from_vec_unchecked(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.0.iter().any(|id| id == item_id)
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.0.iter().position(|id| id == item_id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for Selection {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
