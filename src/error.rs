// ============================================================================
// i18n-extract - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 核心流水线的错误类型定义
// 边界:
//   - ✅ 扫描、读写目录过程中的致命错误
//   - ✅ 错误来源（io / walkdir / serde_json / regex）的保留
//   - ❌ 不应包含目录解析失败（由 LoadStatus::Corrupt 表示，非致命）
//   - ❌ 不应包含 CLI 层的错误处理
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// 核心流水线错误
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to walk source directory {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read source file {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    #[error("failed to read catalog {path}")]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create catalog directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write catalog {path}")]
    WriteCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
