// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）、英文、西班牙文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" / "en" / "es"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 是否为已内置的语言
pub fn is_supported_locale(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}

/// 翻译消息（当前语言，无参数）
///
/// # 示例
/// ```no_run
/// use pull_distribution::i18n::t;
/// let msg = t("selection.empty");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（当前语言，带参数）
///
/// # 示例
/// ```no_run
/// use pull_distribution::i18n::t_with_args;
/// let msg = t_with_args("capacity.overflow", &[("count", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key).to_string(), args)
}

/// 翻译消息（指定语言，带参数）
///
/// 不读写全局 locale，供 API 层按配置语言输出
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn interpolate(mut template: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        template = template.replace(&placeholder, v);
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 恢复默认语言
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("capacity.overflow", &[("count", "3")]);
        assert_eq!(msg, "3 item(s) will not be distributed (insufficient capacity)");

        // 恢复默认语言
        set_locale("zh-CN");
        let msg = t("selection.empty");
        assert_eq!(msg, "请从左侧选择字段");
    }

    #[test]
    fn test_translate_explicit_locale() {
        let msg = t_in("es", "pull.label", &[("number", "1"), ("total", "3")]);
        assert_eq!(msg, "SACA 1/3");

        let msg = t_in("en", "pull.label", &[("number", "2"), ("total", "2")]);
        assert_eq!(msg, "PULL 2/2");
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported_locale("zh-CN"));
        assert!(is_supported_locale("es"));
        assert!(!is_supported_locale("fr"));
    }
}
