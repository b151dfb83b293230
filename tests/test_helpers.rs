// ==========================================
// 测试辅助工具
// ==========================================
// 职责: 目录夹具、条目/集包袋构建器、临时配置文件
// ==========================================

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use pull_distribution::config::{AppConfig, ConfigManager};
use pull_distribution::domain::{Bucket, Catalog, CatalogEntry, PullSize};
use tempfile::NamedTempFile;

// ==========================================
// 目录夹具
// ==========================================

/// 包裹列表可显示字段
pub fn package_field_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("guide_number", "Guide number").pinned(),
        CatalogEntry::new("nro_master", "Master number").default_selected(),
        CatalogEntry::new("name", "Recipient").default_selected(),
        CatalogEntry::new("address", "Address"),
        CatalogEntry::new("city", "City").default_selected(),
        CatalogEntry::new("province", "Province").default_selected(),
        CatalogEntry::new("phone_number", "Phone"),
        CatalogEntry::new("status", "Status").default_selected(),
        CatalogEntry::new("notes", "Notes"),
        CatalogEntry::new("pull_name", "Pull"),
    ])
}

/// 简单目录 a..d
pub fn abcd_catalog() -> Catalog {
    Catalog::from_pairs([("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")])
}

// ==========================================
// 条目构建
// ==========================================

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// 生成 p1..pn
pub fn packages(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("p{}", i)).collect()
}

// ==========================================
// 集包袋构建器
// ==========================================

pub struct BucketBuilder {
    bucket_id: String,
    size: Option<PullSize>,
    capacity: i64,
}

impl BucketBuilder {
    pub fn new(bucket_id: &str) -> Self {
        Self {
            bucket_id: bucket_id.to_string(),
            size: None,
            capacity: 10,
        }
    }

    pub fn size(mut self, size: PullSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Bucket {
        Bucket::with_id(self.bucket_id, self.size, self.capacity)
    }
}

/// 按容量列表生成 B1..Bn
pub fn buckets(capacities: &[i64]) -> Vec<Bucket> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, &c)| BucketBuilder::new(&format!("B{}", i + 1)).capacity(c).build())
        .collect()
}

// ==========================================
// 配置
// ==========================================

pub fn config_with_locale(locale: &str) -> Arc<ConfigManager> {
    pull_distribution::logging::init_test();
    let config = AppConfig {
        locale: locale.to_string(),
        ..AppConfig::default()
    };
    Arc::new(ConfigManager::from_config(config).expect("Failed to build config"))
}

/// 写入临时配置文件
pub fn write_temp_config(content: &str) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
