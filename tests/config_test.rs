// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 配置文件加载、校验与模板实例化
// ==========================================

mod test_helpers;

use pull_distribution::config::{config_keys, ConfigManager};
use pull_distribution::domain::{PullSize, ValidationMode};
use test_helpers::write_temp_config;

#[test]
fn test_load_config_file() {
    let file = write_temp_config(
        r#"{
            "default_bucket_capacity": 20,
            "default_pull_size": "GRANDE",
            "validation_mode": "AUTO_FIX",
            "locale": "es",
            "distribution_profiles": [
                {
                    "profile_id": "std",
                    "title": "Standard",
                    "buckets": [
                        {"size": "SMALL", "capacity": 5},
                        {"capacity": 10}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let manager = ConfigManager::new(file.path()).unwrap();

    assert_eq!(manager.source(), Some(file.path()));
    assert_eq!(manager.default_bucket_capacity(), 20);
    assert_eq!(manager.default_pull_size(), Some(PullSize::Large));
    assert_eq!(manager.validation_mode(), ValidationMode::AutoFix);
    assert_eq!(manager.locale(), "es");
    assert_eq!(manager.log_level(), "info", "未写的键使用默认值");

    let profile = manager.get_distribution_profile(" std ").unwrap();
    assert_eq!(profile.total_capacity(), 15);
    assert_eq!(manager.list_distribution_profiles().len(), 1);

    let buckets = manager.build_buckets("std").unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].size, Some(PullSize::Small));
    assert_eq!(buckets[1].size, None);
    assert_eq!(buckets[1].capacity, 10);

    assert_eq!(
        manager
            .get_config_value(config_keys::VALIDATION_MODE)
            .unwrap(),
        Some("AUTO_FIX".to_string())
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::new(dir.path().join("absent.json")).unwrap();

    assert!(manager.source().is_none());
    assert_eq!(manager.default_bucket_capacity(), 10);
    assert_eq!(manager.locale(), "zh-CN");
    assert!(manager.list_distribution_profiles().is_empty());
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_temp_config("{ not json").unwrap();
    assert!(ConfigManager::new(file.path()).is_err());
}

#[test]
fn test_unsupported_locale_is_error() {
    let file = write_temp_config(r#"{"locale": "fr"}"#).unwrap();
    let err = ConfigManager::new(file.path()).unwrap_err();
    assert!(err.to_string().contains("fr"), "错误信息应包含语言值: {}", err);
}

#[test]
fn test_duplicate_profile_ids_are_error() {
    let file = write_temp_config(
        r#"{
            "distribution_profiles": [
                {"profile_id": "a", "title": "A"},
                {"profile_id": "a", "title": "A again"}
            ]
        }"#,
    )
    .unwrap();

    assert!(ConfigManager::new(file.path()).is_err());
}

#[test]
fn test_config_snapshot_round_trips() {
    let manager = ConfigManager::default();
    let snapshot = manager.get_config_snapshot().unwrap();
    let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

    assert_eq!(value["default_bucket_capacity"], 10);
    assert_eq!(value["validation_mode"], "STRICT");
}
