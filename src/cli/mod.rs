// ============================================================================
// i18n-extract - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口入口和路由
// 边界:
//   - ✅ CLI 结构定义
//   - ✅ 命令行参数解析配置
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 子模块导出
//   - ❌ 不应包含具体提取逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod extract;
pub mod init;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::i18n;
use crate::models::catalog::KeyStrategy;
use crate::models::config::{Config, RuntimeArgs, DEFAULT_CONFIG_FILE};
use crate::utils::colors::Colors;
use crate::utils::logger;
use extract::{handle_extract, RunMode};
use init::{handle_init, InitArgs};

/// i18n-extract - extract user-facing strings into a translation catalog
#[derive(Debug, Parser)]
#[command(name = "i18n-extract")]
#[command(about = "Extract user-facing strings from source files into a JSON translation catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Source directory to scan
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Catalog file to update
    #[arg(short = 'o', long)]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// How the first generated key index is chosen
    #[arg(long, value_enum)]
    pub key_strategy: Option<KeyStrategy>,

    /// Report what would be added without writing the catalog
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Do not write; exit with status 1 if new strings are found
    #[arg(long)]
    pub check: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Interface language (en_us, zh_cn)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing configuration file with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl Cli {
    fn run_mode(&self) -> RunMode {
        if self.check {
            RunMode::Check
        } else if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Write
        }
    }
}

pub fn run_cli() -> Result<ExitCode> {
    execute(Cli::parse())
}

/// 按解析后的参数执行
pub fn execute(cli: Cli) -> Result<ExitCode> {
    logger::init_tracing(cli.verbose);

    if cli.init {
        handle_init(InitArgs {
            config: cli.config.clone(),
            force: cli.force,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load(&cli.config)?;
    config.merge_runtime_args(build_runtime_args(&cli));

    i18n::set_language(&config.i18n.language);
    Colors::configure(config.output.colored);

    handle_extract(&config, cli.run_mode())
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        root: cli.root.clone(),
        catalog: cli.catalog.clone(),
        key_strategy: cli.key_strategy,
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        language: cli.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_write_mode() {
        let cli = Cli::try_parse_from(["i18n-extract"]).unwrap();
        assert_eq!(cli.run_mode(), RunMode::Write);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn check_and_dry_run_conflict() {
        assert!(Cli::try_parse_from(["i18n-extract", "--check", "--dry-run"]).is_err());
        let cli = Cli::try_parse_from(["i18n-extract", "--check"]).unwrap();
        assert_eq!(cli.run_mode(), RunMode::Check);
    }

    #[test]
    fn flags_become_runtime_overrides() {
        let cli = Cli::try_parse_from([
            "i18n-extract",
            "--root",
            "lib",
            "--key-strategy",
            "after-highest",
            "--no-color",
        ])
        .unwrap();
        let args = build_runtime_args(&cli);
        assert_eq!(args.root, Some(PathBuf::from("lib")));
        assert_eq!(args.key_strategy, Some(KeyStrategy::AfterHighest));
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.verbose, None);
    }

    #[test]
    fn force_requires_init() {
        assert!(Cli::try_parse_from(["i18n-extract", "--force"]).is_err());
    }
}
