// ============================================================================
// i18n-extract - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod report;

pub use catalog::{Catalog, GeneratedKey, KeyStrategy};
pub use config::{Config, RuntimeArgs};
pub use report::{AddedEntry, ExtractedStrings, LoadStatus, MergeReport, RunReport, ScanReport};
