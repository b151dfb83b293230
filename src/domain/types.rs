// ==========================================
// 物流包裹分袋系统 - 领域类型定义
// ==========================================
// 职责: 集包袋尺寸、校验模式等枚举类型
// 红线: 尺寸只是标签, 分配只看数字容量
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 集包袋尺寸 (Pull Size)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE
// 兼容旧表单取值: PEQUENO / MEDIANO / GRANDE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullSize {
    #[serde(alias = "PEQUENO")]
    Small, // 小袋
    #[serde(alias = "MEDIANO")]
    Medium, // 中袋
    #[serde(alias = "GRANDE")]
    Large, // 大袋
}

impl fmt::Display for PullSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullSize::Small => write!(f, "SMALL"),
            PullSize::Medium => write!(f, "MEDIUM"),
            PullSize::Large => write!(f, "LARGE"),
        }
    }
}

impl FromStr for PullSize {
    type Err = String;

    /// 从字符串解析尺寸（大小写不敏感）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SMALL" | "PEQUENO" => Ok(PullSize::Small),
            "MEDIUM" | "MEDIANO" => Ok(PullSize::Medium),
            "LARGE" | "GRANDE" => Ok(PullSize::Large),
            other => Err(format!("未知的集包袋尺寸: {}", other)),
        }
    }
}

// ==========================================
// 校验模式 (Validation Mode)
// ==========================================
// 用途: 分袋下发前的校验严格程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationMode {
    /// 严格模式：任何违规都返回错误
    #[default]
    Strict,
    /// 自动修复模式：容量类违规只记警告，超出部分保持未分配
    AutoFix,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "STRICT"),
            ValidationMode::AutoFix => write!(f, "AUTO_FIX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_size_parse_legacy_values() {
        assert_eq!("pequeno".parse::<PullSize>(), Ok(PullSize::Small));
        assert_eq!("MEDIANO".parse::<PullSize>(), Ok(PullSize::Medium));
        assert_eq!(" large ".parse::<PullSize>(), Ok(PullSize::Large));
        assert!("XL".parse::<PullSize>().is_err());
    }

    #[test]
    fn test_pull_size_serde() {
        let json = serde_json::to_string(&PullSize::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");

        let legacy: PullSize = serde_json::from_str("\"GRANDE\"").unwrap();
        assert_eq!(legacy, PullSize::Large);
    }
}
