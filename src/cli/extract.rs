// ============================================================================
// i18n-extract - 提取命令处理
// ============================================================================
//
// 文件: src/cli/extract.rs
// 职责: 运行提取流水线并输出结果
// 边界:
//   - ✅ 调用核心流水线
//   - ✅ 进度显示和结果汇总
//   - ✅ 检查模式的退出码
//   - ❌ 不应包含扫描、合并算法
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use anyhow::Result;
use std::process::ExitCode;

use crate::core::ExtractionPipeline;
use crate::models::config::Config;
use crate::ui::spinner::Spinner;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::tf;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// 合并并写入目录
    Write,
    /// 只计算，不写入
    DryRun,
    /// 不写入；存在待新增字符串时以非零码退出
    Check,
}

impl RunMode {
    pub fn writes(&self) -> bool {
        matches!(self, RunMode::Write)
    }
}

/// 执行提取
pub fn handle_extract(config: &Config, mode: RunMode) -> Result<ExitCode> {
    let verbose = config.output.verbose;
    Logger::info(tf!("extract.scanning", config.scan.root.display()));

    let spinner = Spinner::new(String::new(), config.output.show_progress && !verbose);
    let result = ExtractionPipeline::new(config)
        .with_dry_run(!mode.writes())
        .with_progress(|path, scanned| {
            spinner.update_message(tf!("extract.progress", scanned, path.display()));
        })
        .run();
    spinner.stop();
    let report = result?;

    Logger::info(tf!(
        "extract.found",
        report.scan.strings.len(),
        report.scan.files_scanned
    ));
    summary::print_scan_notes(&report);
    summary::print_load_status(&report);
    summary::render_run_summary(&report, verbose);

    if mode == RunMode::Check {
        summary::print_check_result(&report);
        if report.added_count() > 0 {
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
