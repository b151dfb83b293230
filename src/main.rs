// ==========================================
// 物流包裹分袋系统 - 命令行入口
// ==========================================
// 输入: JSON 请求文件
// 输出: JSON 结果 (stdout), 日志写 stderr
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use pull_distribution::api::{DistributionApi, SelectionApi, ValidationMode};
use pull_distribution::config::ConfigManager;
use pull_distribution::domain::{Bucket, Catalog, PullSize};

#[derive(Parser)]
#[command(name = "pull-distribution", version, about = "物流包裹分袋系统")]
struct Cli {
    /// 配置文件路径（默认使用系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 提示文本语言（覆盖配置）
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 分袋预览
    Preview {
        /// 请求文件 {items, buckets | profile}
        request: PathBuf,
    },
    /// 校验并生成集包袋草稿
    Dispatch {
        /// 请求文件 {destiny, items, buckets | profile}
        request: PathBuf,
        /// 容量类违规只警告不报错
        #[arg(long)]
        auto_fix: bool,
    },
    /// 列选择器视图
    Columns {
        /// 请求文件 {catalog, selected?, moves?}
        request: PathBuf,
    },
}

// ==========================================
// 请求对象
// ==========================================

#[derive(Debug, Deserialize)]
struct BucketInput {
    #[serde(default)]
    bucket_id: Option<String>,
    #[serde(default)]
    size: Option<PullSize>,
    capacity: i64,
}

impl From<BucketInput> for Bucket {
    fn from(input: BucketInput) -> Self {
        match input.bucket_id {
            Some(id) => Bucket::with_id(id, input.size, input.capacity),
            None => Bucket::new(input.size, input.capacity),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DistributionRequest {
    #[serde(default)]
    destiny: Option<String>,
    items: Vec<String>,
    #[serde(default)]
    buckets: Vec<BucketInput>,
    #[serde(default)]
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoveInput {
    from: usize,
    to: usize,
}

#[derive(Debug, Deserialize)]
struct ColumnsRequest {
    catalog: Catalog,
    #[serde(default)]
    selected: Option<Vec<String>>,
    #[serde(default)]
    moves: Vec<MoveInput>,
}

fn read_request<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("读取请求文件失败: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("解析请求文件失败: {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn resolve_buckets(api: &DistributionApi, request: &mut DistributionRequest) -> Result<Vec<Bucket>> {
    match &request.profile {
        Some(profile_id) if request.buckets.is_empty() => {
            Ok(api.buckets_from_profile(profile_id)?)
        }
        Some(_) => Err(anyhow!("buckets 与 profile 只能指定一个")),
        None => Ok(std::mem::take(&mut request.buckets)
            .into_iter()
            .map(Bucket::from)
            .collect()),
    }
}

fn load_config(cli: &Cli) -> Result<ConfigManager> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::from_default_location(),
    }
    .map_err(|e| anyhow!("加载配置失败: {}", e))?;

    match &cli.locale {
        Some(locale) => {
            let mut config = manager.config().clone();
            config.locale = locale.clone();
            ConfigManager::from_config(config).map_err(|e| anyhow!("无效的语言设置: {}", e))
        }
        None => Ok(manager),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // 日志级别来自配置，加载期间先用临时 subscriber
    let config = Arc::new(pull_distribution::logging::with_bootstrap(|| load_config(&cli))?);

    pull_distribution::logging::init_with_default(config.log_level());
    pull_distribution::perf::install_from_env();
    pull_distribution::i18n::set_locale(config.locale());

    tracing::debug!(
        version = pull_distribution::VERSION,
        config = ?config.source(),
        "{} 启动",
        pull_distribution::APP_NAME
    );

    match cli.command {
        Commands::Preview { ref request } => {
            let api = DistributionApi::new(config.clone());
            let mut request: DistributionRequest = read_request(request)?;
            let buckets = resolve_buckets(&api, &mut request)?;
            print_json(&api.preview(&request.items, &buckets)?)
        }
        Commands::Dispatch {
            ref request,
            auto_fix,
        } => {
            let api = DistributionApi::new(config.clone());
            let mut request: DistributionRequest = read_request(request)?;
            let buckets = resolve_buckets(&api, &mut request)?;
            let destiny = request
                .destiny
                .clone()
                .ok_or_else(|| anyhow!("dispatch 请求缺少 destiny"))?;
            let mode = auto_fix.then_some(ValidationMode::AutoFix);
            print_json(&api.dispatch(&destiny, &request.items, &buckets, mode)?)
        }
        Commands::Columns { ref request } => {
            let request: ColumnsRequest = read_request(request)?;
            let api = SelectionApi::new(Arc::new(request.catalog), config.locale());

            let mut selection = match &request.selected {
                Some(ids) => api.load_selection(ids)?,
                None => api.default_selection(),
            };
            for m in &request.moves {
                selection = api.move_item(&selection, m.from, m.to)?;
            }
            print_json(&api.view(&selection))
        }
    }
}
