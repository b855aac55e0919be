// ============================================================================
// i18n-extract - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和开关控制
// 边界:
//   - ✅ 日志级别颜色主题
//   - ✅ 颜色输出格式化
//   - ✅ 颜色开关（配置 / 非 TTY）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::{Color, Colorize};

/// 日志级别颜色主题
pub mod log_colors {
    use colored::Color;

    /// 信息日志颜色 (青色)
    pub const INFO: Color = Color::Cyan;

    /// 警告日志颜色 (黄色)
    pub const WARN: Color = Color::Yellow;

    /// 错误日志颜色 (红色)
    pub const ERROR: Color = Color::Red;

    /// 成功日志颜色 (绿色)
    pub const SUCCESS: Color = Color::Green;

    /// 次要信息颜色 (灰色)
    pub const MUTED: Color = Color::BrightBlack;
}

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 根据配置与终端状态启用或关闭彩色输出
    pub fn configure(colored: bool) {
        if colored && atty::is(atty::Stream::Stdout) {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// 为文本添加颜色
    pub fn colorize(text: &str, color: Color) -> String {
        text.color(color).to_string()
    }

    pub fn info(text: &str) -> String {
        Self::colorize(text, log_colors::INFO)
    }

    pub fn warn(text: &str) -> String {
        Self::colorize(text, log_colors::WARN)
    }

    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }

    pub fn muted(text: &str) -> String {
        Self::colorize(text, log_colors::MUTED)
    }
}
