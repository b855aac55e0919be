// ============================================================================
// i18n-extract - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "I18N";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 信息图标
    pub const INFO: &str = "i";
    /// 扫描图标
    pub const SCAN: &str = "◇";
    /// 文件图标
    pub const FILE: &str = "●";
    /// 新增图标
    pub const ADD: &str = "▲";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 箭头图标
    pub const ARROW: &str = "→";
}

/// 加载 spinner 字符
pub mod spinner_chars {
    pub const BASE: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
}

/// 分隔线
pub const RULE_HEAVY: &str = "═══════════════════════════════════════";
pub const RULE_LIGHT: &str = "───────────────────────────────────────";
