// ============================================================================
// i18n-extract - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与公共接口导出
//
// 流程: 扫描源码 → 加载目录 → 合并新字符串 → 写入目录
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{CatalogMerger, CatalogStore, ExtractionPipeline, SourceScanner};
pub use error::{ExtractError, Result};
pub use models::{Catalog, Config, KeyStrategy, RunReport};
