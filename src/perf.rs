use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 根据环境变量设置性能日志开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `PULL_DISTRIBUTION_PERF=1` 强制开启，`=0` 强制关闭
pub fn install_from_env() {
    let enabled = match std::env::var("PULL_DISTRIBUTION_PERF") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    };
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 性能统计 Guard：记录 elapsed_us
///
/// 使用方式：
/// ```ignore
/// let _perf = pull_distribution::perf::PerfGuard::new("preview_distribution");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_us = self.start.elapsed().as_micros() as u64;
        tracing::debug!(target: "perf", op = self.op, elapsed_us, "done");
    }
}
