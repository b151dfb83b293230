// ==========================================
// 物流包裹分袋系统 - 配置层
// ==========================================
// 职责: 系统配置管理, 缺省值 + JSON 文件覆写
// 存储: config.json
// ==========================================

pub mod config_manager;
pub mod distribution_profile;

// 重导出核心配置管理器
pub use config_manager::{config_keys, AppConfig, ConfigManager, ConfigResult};
pub use distribution_profile::{BucketTemplate, DistributionProfile};
