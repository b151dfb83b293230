// ==========================================
// 物流包裹分袋系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、模板实例化
// 存储: JSON 配置文件 (缺失时使用默认值)
// 默认位置: <config_dir>/pull-distribution/config.json
// ==========================================

use crate::config::distribution_profile::DistributionProfile;
use crate::domain::bucket::Bucket;
use crate::domain::types::{PullSize, ValidationMode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

/// 配置层错误（与 anyhow 互通）
pub type ConfigResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const DEFAULT_BUCKET_CAPACITY: &str = "default_bucket_capacity";
    pub const DEFAULT_PULL_SIZE: &str = "default_pull_size";
    pub const VALIDATION_MODE: &str = "validation_mode";
    pub const LOCALE: &str = "locale";
    pub const LOG_LEVEL: &str = "log_level";
    pub const DISTRIBUTION_PROFILES: &str = "distribution_profiles";
}

const APP_DIR_NAME: &str = "pull-distribution";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// AppConfig - 配置文件内容
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 新增集包袋时的默认最大件数
    pub default_bucket_capacity: i64,

    /// 新增集包袋时的默认尺寸（None 表示未定义）
    pub default_pull_size: Option<PullSize>,

    /// 下发前的校验模式
    pub validation_mode: ValidationMode,

    /// 提示文本语言
    pub locale: String,

    /// RUST_LOG 未设置时的日志级别
    pub log_level: String,

    /// 分袋模板
    pub distribution_profiles: Vec<DistributionProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_bucket_capacity: 10,
            default_pull_size: None,
            validation_mode: ValidationMode::Strict,
            locale: "zh-CN".to_string(),
            log_level: "info".to_string(),
            distribution_profiles: Vec::new(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 从指定文件加载配置
    ///
    /// 文件不存在时返回默认配置；文件存在但格式错误时报错
    pub fn new(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self {
                config: AppConfig::default(),
                source: None,
            });
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("读取配置文件失败: {}: {}", path.display(), e))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| format!("解析配置文件失败: {}: {}", path.display(), e))?;

        Self::validate(&config)?;

        tracing::info!(
            path = %path.display(),
            profiles = config.distribution_profiles.len(),
            "配置加载完成"
        );

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 从默认位置加载配置
    pub fn from_default_location() -> ConfigResult<Self> {
        match Self::default_config_path() {
            Some(path) => Self::new(path),
            None => {
                tracing::warn!("无法确定系统配置目录，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 直接使用内存中的配置（主要用于测试）
    pub fn from_config(config: AppConfig) -> ConfigResult<Self> {
        Self::validate(&config)?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 实际加载的配置文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn default_bucket_capacity(&self) -> i64 {
        self.config.default_bucket_capacity
    }

    pub fn default_pull_size(&self) -> Option<PullSize> {
        self.config.default_pull_size
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation_mode
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    pub fn log_level(&self) -> &str {
        &self.config.log_level
    }

    /// 按键读取配置值（字符串形式）
    ///
    /// # 返回
    /// - Some(String): 配置值（字符串原样返回，其它类型为 JSON 文本）
    /// - None: 未知键或值为 null
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let value = serde_json::to_value(&self.config)?;
        Ok(match value.get(key) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        })
    }

    /// 获取生效配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }

    pub fn get_distribution_profile(&self, profile_id: &str) -> Option<&DistributionProfile> {
        let id = profile_id.trim();
        self.config
            .distribution_profiles
            .iter()
            .find(|p| p.profile_id == id)
    }

    pub fn list_distribution_profiles(&self) -> &[DistributionProfile] {
        &self.config.distribution_profiles
    }

    // ==========================================
    // 集包袋构建
    // ==========================================

    /// 按默认值新建一个集包袋
    pub fn new_bucket(&self) -> Bucket {
        Bucket::new(self.default_pull_size(), self.default_bucket_capacity())
    }

    /// 按模板生成集包袋列表
    pub fn build_buckets(&self, profile_id: &str) -> ConfigResult<Vec<Bucket>> {
        let profile = self
            .get_distribution_profile(profile_id)
            .ok_or_else(|| format!("分袋模板不存在: {}", profile_id))?;
        Ok(profile.instantiate())
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn validate(config: &AppConfig) -> ConfigResult<()> {
        if config.default_bucket_capacity < 1 {
            return Err(format!(
                "{} 必须 >= 1，当前值: {}",
                config_keys::DEFAULT_BUCKET_CAPACITY,
                config.default_bucket_capacity
            )
            .into());
        }

        if !crate::i18n::is_supported_locale(&config.locale) {
            return Err(format!("{} 不受支持: {}", config_keys::LOCALE, config.locale).into());
        }

        let mut seen = std::collections::HashSet::new();
        for profile in &config.distribution_profiles {
            if !seen.insert(profile.profile_id.as_str()) {
                return Err(format!("分袋模板ID重复: {}", profile.profile_id).into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::default();
        assert_eq!(manager.default_bucket_capacity(), 10);
        assert_eq!(manager.validation_mode(), ValidationMode::Strict);
        assert_eq!(manager.locale(), "zh-CN");
        assert!(manager.source().is_none());
    }

    #[test]
    fn test_get_config_value() {
        let manager = ConfigManager::default();
        assert_eq!(
            manager
                .get_config_value(config_keys::DEFAULT_BUCKET_CAPACITY)
                .unwrap(),
            Some("10".to_string())
        );
        assert_eq!(
            manager.get_config_value(config_keys::LOCALE).unwrap(),
            Some("zh-CN".to_string())
        );
        assert_eq!(
            manager
                .get_config_value(config_keys::DEFAULT_PULL_SIZE)
                .unwrap(),
            None
        );
        assert_eq!(manager.get_config_value("unknown").unwrap(), None);
    }

    #[test]
    fn test_rejects_invalid_default_capacity() {
        let config = AppConfig {
            default_bucket_capacity: 0,
            ..AppConfig::default()
        };
        assert!(ConfigManager::from_config(config).is_err());
    }

    #[test]
    fn test_new_bucket_uses_defaults() {
        let config = AppConfig {
            default_bucket_capacity: 25,
            default_pull_size: Some(PullSize::Large),
            ..AppConfig::default()
        };
        let manager = ConfigManager::from_config(config).unwrap();

        let bucket = manager.new_bucket();
        assert_eq!(bucket.capacity, 25);
        assert_eq!(bucket.size, Some(PullSize::Large));
    }
}
