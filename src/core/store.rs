// ============================================================================
// i18n-extract - 翻译目录读写
// ============================================================================
//
// 文件: src/core/store.rs
// 职责: 翻译目录 JSON 文件的加载与写入
// 边界:
//   - ✅ 目录文件加载（缺失/损坏时回退为空目录）
//   - ✅ 目录文件写入（4 空格缩进、保留非 ASCII、末尾换行）
//   - ✅ 写入前创建父目录，临时文件 + 重命名
//   - ❌ 不应包含合并逻辑
//   - ❌ 不应尝试修复损坏的文件
//
// ============================================================================

use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};
use crate::models::catalog::Catalog;
use crate::models::report::LoadStatus;

/// 目录文件缩进
const INDENT: &[u8] = b"    ";

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub status: LoadStatus,
}

/// 翻译目录存储
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载目录；文件不存在或无法解析时返回空目录
    pub fn load(&self) -> Result<LoadedCatalog> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog not found, starting empty");
                return Ok(LoadedCatalog {
                    catalog: Catalog::new(),
                    status: LoadStatus::Missing,
                });
            }
            Err(source) => {
                return Err(ExtractError::ReadCatalog {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<Catalog>(&bytes) {
            Ok(catalog) => {
                tracing::debug!(path = %self.path.display(), keys = catalog.len(), "catalog loaded");
                Ok(LoadedCatalog {
                    catalog,
                    status: LoadStatus::Loaded,
                })
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "catalog is not valid, starting empty");
                Ok(LoadedCatalog {
                    catalog: Catalog::new(),
                    status: LoadStatus::Corrupt(err.to_string()),
                })
            }
        }
    }

    /// 写入目录，覆盖已有文件
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = render(catalog)?;
        let staging = self.staging_path();
        fs::write(&staging, content)
            .and_then(|_| fs::rename(&staging, &self.path))
            .map_err(|source| {
                let _ = fs::remove_file(&staging);
                ExtractError::WriteCatalog {
                    path: self.path.clone(),
                    source,
                }
            })?;

        tracing::debug!(path = %self.path.display(), keys = catalog.len(), "catalog written");
        Ok(())
    }

    /// 同目录下的临时文件
    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

/// 序列化目录为最终文件内容
pub fn render(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
