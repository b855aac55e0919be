// ============================================================================
// i18n-extract - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含扫描或合并逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::catalog::{KeyStrategy, DEFAULT_KEY_PREFIX};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "i18n-extract.toml";

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 扫描配置
    #[serde(default)]
    pub scan: ScanConfig,
    /// 目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 扫描配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// 源码根目录
    #[serde(default = "Config::default_scan_root")]
    pub root: PathBuf,
    /// 需要扫描的文件扩展名（不含点）
    #[serde(default = "Config::default_extensions")]
    pub extensions: Vec<String>,
    /// 识别的输出函数名
    #[serde(default = "Config::default_functions")]
    pub functions: Vec<String>,
    /// 排除扫描的目录或文件模式（相对根目录）
    #[serde(default)]
    pub ignore: Vec<String>,
    /// 遇到非 UTF-8 文件时跳过并警告，否则终止
    #[serde(default = "Config::default_skip_invalid_utf8")]
    pub skip_invalid_utf8: bool,
}

/// 目录配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 目录文件路径
    #[serde(default = "Config::default_catalog_path")]
    pub path: PathBuf,
    /// 自动键前缀
    #[serde(default = "Config::default_key_prefix")]
    pub key_prefix: String,
    /// 键生成策略
    #[serde(default)]
    pub key_strategy: KeyStrategy,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度
    #[serde(default = "Config::default_show_progress")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub root: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub key_strategy: Option<KeyStrategy>,
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    fn default_scan_root() -> PathBuf {
        PathBuf::from("src")
    }

    fn default_extensions() -> Vec<String> {
        vec!["rs".to_string()]
    }

    /// 默认识别的输出函数
    fn default_functions() -> Vec<String> {
        [
            "print_info",
            "print_ok",
            "print_err",
            "print_warn",
            "println!",
            "eprintln!",
            "panic!",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_skip_invalid_utf8() -> bool {
        true
    }

    fn default_catalog_path() -> PathBuf {
        ["src", "i18n", "locales", "en.json"].iter().collect()
    }

    fn default_key_prefix() -> String {
        DEFAULT_KEY_PREFIX.to_string()
    }

    fn default_show_progress() -> bool {
        true
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 加载配置文件；文件不存在时使用默认配置
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", config_path.display()))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(root) = args.root {
            self.scan.root = root;
        }
        if let Some(catalog) = args.catalog {
            self.catalog.path = catalog;
        }
        if let Some(strategy) = args.key_strategy {
            self.catalog.key_strategy = strategy;
        }
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            self.output.show_progress = show_progress;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("failed to write config {}", config_path.display()))?;
        Ok(())
    }

    /// 生成默认配置文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: Config::default_scan_root(),
            extensions: Config::default_extensions(),
            functions: Config::default_functions(),
            ignore: Vec::new(),
            skip_invalid_utf8: Config::default_skip_invalid_utf8(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Config::default_catalog_path(),
            key_prefix: Config::default_key_prefix(),
            key_strategy: KeyStrategy::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
