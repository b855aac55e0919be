// ============================================================================
// i18n-extract - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 终端交互组件导出
//
// ============================================================================

pub mod spinner;
pub mod summary;
