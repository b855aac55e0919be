// ============================================================================
// i18n-extract - 文本样式工具
// ============================================================================
//
// 文件: src/utils/styles.rs
// 职责: 终端文本样式格式化
// 边界:
//   - ✅ 文本样式（粗体）
//   - ❌ 不应包含颜色相关功能
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use colored::Colorize;

/// 文本样式工具函数
pub struct TextStyles;

impl TextStyles {
    /// 粗体文本
    pub fn bold(text: &str) -> String {
        text.bold().to_string()
    }
}
