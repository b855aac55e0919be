// ============================================================================
// i18n-extract - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 启动 CLI 并把错误转换为退出码
//
// ============================================================================

use std::process::ExitCode;

use i18n_extract::cli;
use i18n_extract::tf;
use i18n_extract::utils::logger::Logger;

fn main() -> ExitCode {
    match cli::run_cli() {
        Ok(code) => code,
        Err(err) => {
            Logger::error(tf!("error.run_failed", format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
