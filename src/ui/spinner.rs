// ============================================================================
// i18n-extract - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/ui/spinner.rs
// 职责: 扫描过程中的终端加载动画
// 边界:
//   - ✅ 加载动画显示和控制
//   - ✅ 非 TTY / 关闭进度时静默
//   - ✅ 自定义消息更新
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::utils::constants::spinner_chars;

/// Spinner 加载动画组件
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// 创建 Spinner；`enabled` 为 false 或 stdout 不是终端时不显示
    pub fn new(message: String, enabled: bool) -> Self {
        let bar = if enabled && atty::is(atty::Stream::Stdout) {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&spinner_chars::BASE);
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// 更新消息
    pub fn update_message(&self, message: String) {
        self.bar.set_message(message);
    }

    /// 停止并清除
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
