// ==========================================
// 物流包裹分袋系统 - 目录领域模型
// ==========================================
// 用途: 可选条目全集 (item_id -> 显示名称)
// 红线: 编辑会话内不可变, 由调用方提供
// 顺序: 插入顺序即自然顺序
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CatalogEntry - 目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: String, // 条目ID
    pub label: String,   // 显示名称

    #[serde(default)]
    pub default_selected: bool, // 属于默认选择

    #[serde(default)]
    pub pinned: bool, // 固定显示 (toggle 不可取消)
}

impl CatalogEntry {
    pub fn new(item_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            label: label.into(),
            default_selected: false,
            pinned: false,
        }
    }

    /// 标记为默认选中
    pub fn default_selected(mut self) -> Self {
        self.default_selected = true;
        self
    }

    /// 标记为固定显示（同时默认选中）
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self.default_selected = true;
        self
    }
}

// ==========================================
// Catalog - 目录
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// 从条目列表构建目录
    ///
    /// 重复的 item_id 只保留第一次出现的条目
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(&entry.item_id) {
                tracing::warn!(item_id = %entry.item_id, "目录条目重复，忽略后出现的条目");
                continue;
            }
            index.insert(entry.item_id.clone(), kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            index,
        }
    }

    /// 从 (item_id, label) 对构建目录
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, label)| CatalogEntry::new(id, label))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.index.contains_key(item_id)
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogEntry> {
        self.index.get(item_id).map(|&i| &self.entries[i])
    }

    pub fn label(&self, item_id: &str) -> Option<&str> {
        self.get(item_id).map(|e| e.label.as_str())
    }

    /// 按自然顺序遍历条目
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.iter()
    }

    /// 按自然顺序遍历 item_id
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.item_id.as_str())
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Catalog::new(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}
