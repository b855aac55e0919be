// ============================================================================
// i18n-extract - 运行结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 提取结果汇总显示
// 边界:
//   - ✅ 目录加载状态提示
//   - ✅ 统计信息格式化输出
//   - ✅ 新增条目列表（详细模式）
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::io::{self, Write};

use crate::models::report::{LoadStatus, RunReport};
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, RULE_HEAVY, RULE_LIGHT};
use crate::utils::logger::Logger;
use crate::utils::styles::TextStyles;
use crate::{t, tf};

/// 输出目录加载状态
pub fn print_load_status(report: &RunReport) {
    let path = report.catalog_path.display();
    match &report.load_status {
        LoadStatus::Missing => Logger::info(tf!("catalog.created", path)),
        LoadStatus::Loaded => Logger::info(tf!("catalog.loaded", report.keys_before, path)),
        LoadStatus::Corrupt(detail) => {
            Logger::warn(tf!("catalog.corrupt", path));
            Logger::warn(tf!("catalog.corrupt_detail", detail));
        }
    }
}

/// 输出扫描阶段的提示（跳过的文件）
pub fn print_scan_notes(report: &RunReport) {
    for path in &report.scan.skipped_files {
        Logger::warn(tf!("extract.skipped_file", path.display()));
    }
    for key in &report.merge.collisions {
        Logger::warn(tf!("merge.collision", key));
    }
}

/// 渲染运行汇总
pub fn render_run_summary(report: &RunReport, verbose: bool) {
    if verbose && !report.merge.added.is_empty() {
        Logger::info(format!("\n{} {}", icons::ADD, t!("merge.new_entry")));
        Logger::info(RULE_LIGHT);
        for entry in &report.merge.added {
            Logger::info(format!(
                "  {} {} {}",
                Colors::muted(&entry.key),
                icons::ARROW,
                entry.text
            ));
        }
    }

    let mut summary_lines = vec![
        String::new(),
        format!("{} {}", icons::SUMMARY, TextStyles::bold(&t!("summary.title"))),
        RULE_HEAVY.to_string(),
        format!("{} {}", icons::SCAN, tf!("summary.unique", report.scan.strings.len())),
        format!("{} {}", icons::ADD, tf!("summary.added", report.added_count())),
        format!("{} {}", icons::FILE, tf!("summary.total", report.keys_after)),
    ];

    if !report.scan.skipped_files.is_empty() {
        summary_lines.push(format!(
            "{} {}",
            icons::SKIP,
            tf!("summary.skipped", report.scan.skipped_files.len())
        ));
    }

    for line in summary_lines {
        Logger::info(line);
    }

    let path = report.catalog_path.display();
    if report.written {
        Logger::success(format!(
            "{} {}",
            icons::SUCCESS,
            tf!("summary.done", report.added_count(), path)
        ));
    } else {
        Logger::info(format!("{} {}", icons::INFO, tf!("summary.dry_run", path)));
    }

    let _ = io::stdout().flush();
}

/// 输出检查模式结论
pub fn print_check_result(report: &RunReport) {
    if report.added_count() == 0 {
        Logger::success(format!("{} {}", icons::SUCCESS, t!("check.clean")));
    } else {
        Logger::warn(format!(
            "{} {}",
            icons::WARNING,
            tf!("check.pending", report.added_count())
        ));
    }
}
